use taskglow_core::theme::{home_palette, welcome_palette, HOME_CYCLE_INTERVAL_MS};
use taskglow_core::{Gradient, GradientCycler, GradientCyclerError};

fn palette_of(len: usize) -> Vec<Gradient> {
    (0..len)
        .map(|i| Gradient {
            start_argb: 0xFF000000 + i as u32,
            end_argb: 0xFFFFFFFF - i as u32,
        })
        .collect()
}

#[test]
fn activation_rejects_empty_palette() {
    let err = GradientCycler::activate(Vec::new(), 1_000, 0).unwrap_err();
    assert_eq!(err, GradientCyclerError::EmptyPalette);
}

#[test]
fn activation_rejects_zero_interval() {
    let err = GradientCycler::activate(palette_of(2), 0, 0).unwrap_err();
    assert_eq!(err, GradientCyclerError::ZeroInterval);
}

#[test]
fn index_starts_at_zero() {
    let cycler = GradientCycler::activate(palette_of(4), 1_000, 5_000).unwrap();
    assert_eq!(cycler.current_index(), 0);
    assert_eq!(cycler.palette_len(), 4);
}

#[test]
fn five_advances_over_palette_of_four_wrap_to_one() {
    let mut cycler = GradientCycler::activate(palette_of(4), 1_000, 0).unwrap();
    for _ in 0..5 {
        cycler.advance();
    }
    assert_eq!(cycler.current_index(), 5 % 4);
}

#[test]
fn poll_commits_one_step_per_elapsed_interval() {
    let mut cycler = GradientCycler::activate(palette_of(3), 1_000, 10_000).unwrap();

    assert_eq!(cycler.poll(10_500), 0);
    assert_eq!(cycler.poll(11_000), 1);
    assert_eq!(cycler.poll(11_999), 1);
    assert_eq!(cycler.poll(12_000), 2);
    assert_eq!(cycler.poll(13_000), 0);
}

#[test]
fn late_poll_catches_up_to_the_on_time_index() {
    let mut cycler = GradientCycler::activate(palette_of(4), 1_000, 0).unwrap();
    // Host timer stalled for 5 intervals; the index still lands on 5 mod 4.
    assert_eq!(cycler.poll(5_000), 1);
}

#[test]
fn poll_never_double_commits_an_interval() {
    let mut cycler = GradientCycler::activate(palette_of(4), 1_000, 0).unwrap();
    cycler.poll(3_000);
    // Repeated polls inside the same interval commit nothing further.
    assert_eq!(cycler.poll(3_000), 3);
    assert_eq!(cycler.poll(3_500), 3);
}

#[test]
fn backwards_clock_commits_nothing() {
    let mut cycler = GradientCycler::activate(palette_of(4), 1_000, 10_000).unwrap();
    cycler.poll(12_000);
    assert_eq!(cycler.current_index(), 2);

    assert_eq!(cycler.poll(9_000), 2);
    assert_eq!(cycler.poll(12_000), 2);
}

#[test]
fn poll_folds_huge_clock_jumps_in_constant_time() {
    let mut cycler = GradientCycler::activate(palette_of(4), 1, 0).unwrap();
    // One poll spanning i64::MAX elapsed intervals must return promptly and
    // land on the same index stepping one interval at a time would reach.
    assert_eq!(cycler.poll(i64::MAX), (i64::MAX as u64 % 4) as usize);
    // The jump is fully committed; re-polling the same instant is stable.
    assert_eq!(cycler.poll(i64::MAX), (i64::MAX as u64 % 4) as usize);
    // Subsequent manual steps continue (and wrap) from the folded index.
    assert_eq!(cycler.advance(), (i64::MAX as u64 % 4 + 1) as usize % 4);
}

#[test]
fn manual_advance_does_not_disturb_the_periodic_schedule() {
    let mut cycler = GradientCycler::activate(palette_of(4), 1_000, 0).unwrap();

    cycler.advance();
    assert_eq!(cycler.current_index(), 1);
    // The first periodic boundary still commits its own step.
    assert_eq!(cycler.poll(1_000), 2);
}

#[test]
fn current_gradient_follows_the_index() {
    let palette = palette_of(2);
    let mut cycler = GradientCycler::activate(palette.clone(), 1_000, 0).unwrap();
    assert_eq!(cycler.current_gradient(), palette[0]);
    cycler.advance();
    assert_eq!(cycler.current_gradient(), palette[1]);
}

#[test]
fn default_palettes_drive_a_cycler() {
    let mut welcome = GradientCycler::activate(welcome_palette(), 6_000, 0).unwrap();
    let mut home = GradientCycler::activate(home_palette(), HOME_CYCLE_INTERVAL_MS, 0).unwrap();

    assert_eq!(welcome.poll(6_000), 1);
    assert_eq!(home.poll(HOME_CYCLE_INTERVAL_MS as i64), 1);
}
