use noise_matrix::input::InputEvent;
use noise_matrix::visual::palette::{self, black_and_white_stripes};
use noise_matrix::visual::{PaletteSource, PresetSelector, PRESETS, PRESET_COUNT};

#[test]
fn catalogue_has_twelve_named_presets() {
    assert_eq!(PRESETS.len(), 12);
    assert_eq!(PRESET_COUNT, 12);
    for p in &PRESETS {
        assert!(!p.name.trim().is_empty());
    }
}

#[test]
fn catalogue_parameters_match_the_calibrated_table() {
    let expected: [(u16, u16, bool); 12] = [
        (20, 30, true),
        (10, 50, true),
        (20, 30, true),
        (8, 120, false),
        (4, 30, false),
        (8, 50, false),
        (20, 90, false),
        (20, 30, true),
        (20, 20, true),
        (50, 50, true),
        (90, 90, true),
        (30, 20, true),
    ];
    for (i, (p, want)) in PRESETS.iter().zip(expected).enumerate() {
        assert_eq!((p.speed, p.scale, p.hue_loop), want, "preset {i} ({})", p.name);
    }
    let random: Vec<usize> = PRESETS
        .iter()
        .enumerate()
        .filter(|(_, p)| matches!(p.palette, PaletteSource::Random))
        .map(|(i, _)| i)
        .collect();
    assert_eq!(random, vec![8, 9, 10]);
}

#[test]
fn startup_applies_preset_zero() {
    let sel = PresetSelector::with_seed(3);
    assert_eq!(sel.index(), 0);
    let a = sel.active();
    assert_eq!(a.index, 0);
    assert_eq!(a.palette, palette::RAINBOW);
    assert_eq!((a.speed, a.scale, a.hue_loop), (20, 30, true));
}

#[test]
fn retreat_from_zero_wraps_to_eleven() {
    let mut sel = PresetSelector::with_seed(3);
    sel.retreat();
    assert_eq!(sel.index(), 11);
    assert_eq!(sel.active().palette, palette::RAINBOW_STRIPE);
}

#[test]
fn advance_from_eleven_wraps_to_zero() {
    let mut sel = PresetSelector::with_seed(3);
    sel.select(11);
    sel.advance();
    assert_eq!(sel.index(), 0);
}

#[test]
fn twelve_advances_visit_every_preset_and_return() {
    let mut sel = PresetSelector::with_seed(3);
    let mut seen = Vec::new();
    for _ in 0..12 {
        sel.handle(InputEvent::Advance);
        seen.push(sel.index());
        assert_eq!(sel.active().index, sel.index());
        assert_eq!(sel.active().speed, PRESETS[sel.index()].speed);
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 0]);
}

#[test]
fn index_stays_in_range_under_mixed_events() {
    let mut sel = PresetSelector::with_seed(11);
    let mut rng = fastrand::Rng::with_seed(99);
    let mut model: i64 = 0;
    for _ in 0..500 {
        if rng.bool() {
            sel.handle(InputEvent::Advance);
            model += 1;
        } else {
            sel.handle(InputEvent::Retreat);
            model -= 1;
        }
        assert!(sel.index() < 12);
        assert_eq!(sel.index() as i64, model.rem_euclid(12));
    }
}

#[test]
fn reselecting_a_random_preset_draws_a_new_palette() {
    for idx in [8usize, 9, 10] {
        let mut sel = PresetSelector::new();
        sel.select(idx);
        let first = sel.active().palette;
        sel.select(idx);
        let second = sel.active().palette;
        assert_ne!(first, second, "preset {idx} repeated its palette");
        assert!(
            first
                .entries
                .iter()
                .zip(second.entries.iter())
                .any(|(a, b)| a != b)
        );
    }
}

#[test]
fn striped_presets_build_their_palettes() {
    let mut sel = PresetSelector::with_seed(5);
    sel.select(2);
    assert_eq!(sel.active().palette, black_and_white_stripes());
    sel.select(1);
    assert_eq!(sel.active().palette, palette::purple_and_green_stripes());
}
