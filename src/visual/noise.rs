//! 8.8 fixed-point coherent 3D noise.
//!
//! Coordinates carry the lattice cell in bits 8.. and the position inside the
//! cell in the low byte. The permutation table repeats every 256 cells, so the
//! domain is seamless across integer wraparound of the coordinates.

const PERM: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

#[inline]
fn perm(i: u8) -> u8 {
    PERM[i as usize]
}

/// `i * (scale + 1) / 256`, the usual 8-bit fractional multiply.
#[inline]
pub fn scale8(i: u8, scale: u8) -> u8 {
    ((i as u16 * (scale as u16 + 1)) >> 8) as u8
}

#[inline]
fn ease8_in_out_quad(i: u8) -> u8 {
    let j = if i & 0x80 != 0 { 255 - i } else { i };
    let jj2 = scale8(j, j) << 1;
    if i & 0x80 != 0 { 255 - jj2 } else { jj2 }
}

#[inline]
fn avg7(i: i8, j: i8) -> i8 {
    ((i >> 1) as i16 + (j >> 1) as i16 + (i & 1) as i16) as i8
}

fn grad8(hash: u8, x: i8, y: i8, z: i8) -> i8 {
    let hash = hash & 0x0F;
    let mut u = if hash & 8 != 0 { y } else { x };
    let mut v = if hash < 4 {
        y
    } else if hash == 12 || hash == 14 {
        x
    } else {
        z
    };
    if hash & 1 != 0 {
        u = u.wrapping_neg();
    }
    if hash & 2 != 0 {
        v = v.wrapping_neg();
    }
    avg7(u, v)
}

/// Signed interpolation where `frac` is a 0..=255 fraction of the way to `b`.
fn lerp7by8(a: i8, b: i8, frac: u8) -> i8 {
    if b > a {
        let delta = (b as i16 - a as i16) as u8;
        (a as i16 + scale8(delta, frac) as i16) as i8
    } else {
        let delta = (a as i16 - b as i16) as u8;
        (a as i16 - scale8(delta, frac) as i16) as i8
    }
}

fn noise3_raw(x: u32, y: u32, z: u32) -> i8 {
    let cx = (x >> 8) as u8;
    let cy = (y >> 8) as u8;
    let cz = (z >> 8) as u8;

    let a = perm(cx).wrapping_add(cy);
    let aa = perm(a).wrapping_add(cz);
    let ab = perm(a.wrapping_add(1)).wrapping_add(cz);
    let b = perm(cx.wrapping_add(1)).wrapping_add(cy);
    let ba = perm(b).wrapping_add(cz);
    let bb = perm(b.wrapping_add(1)).wrapping_add(cz);

    let u = ease8_in_out_quad(x as u8);
    let v = ease8_in_out_quad(y as u8);
    let w = ease8_in_out_quad(z as u8);

    // Offsets inside the cell, 7-bit signed; `- 128` gives the far corner.
    let xx = ((x as u8) >> 1) as i8;
    let yy = ((y as u8) >> 1) as i8;
    let zz = ((z as u8) >> 1) as i8;
    let xn = (xx as i16 - 128) as i8;
    let yn = (yy as i16 - 128) as i8;
    let zn = (zz as i16 - 128) as i8;

    let x1 = lerp7by8(grad8(perm(aa), xx, yy, zz), grad8(perm(ba), xn, yy, zz), u);
    let x2 = lerp7by8(grad8(perm(ab), xx, yn, zz), grad8(perm(bb), xn, yn, zz), u);
    let x3 = lerp7by8(
        grad8(perm(aa.wrapping_add(1)), xx, yy, zn),
        grad8(perm(ba.wrapping_add(1)), xn, yy, zn),
        u,
    );
    let x4 = lerp7by8(
        grad8(perm(ab.wrapping_add(1)), xx, yn, zn),
        grad8(perm(bb.wrapping_add(1)), xn, yn, zn),
        u,
    );

    let y1 = lerp7by8(x1, x2, v);
    let y2 = lerp7by8(x3, x4, v);
    lerp7by8(y1, y2, w)
}

/// Coherent noise at an 8.8 fixed-point coordinate, spread over 0..=255.
pub fn noise3(x: u32, y: u32, z: u32) -> u8 {
    let n = noise3_raw(x, y, z).wrapping_add(64) as u8;
    n.saturating_add(n)
}
