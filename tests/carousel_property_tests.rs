mod common;

use proptest::prelude::*;
use raylib::consts::KeyboardKey;

use common::carousel;

#[derive(Debug, Clone)]
enum Action {
    Next,
    Prev,
    Dot(usize),
    Key(bool),
    Enter,
    Leave,
    Tick(u8),
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Next),
        Just(Action::Prev),
        (0..12usize).prop_map(Action::Dot),
        any::<bool>().prop_map(Action::Key),
        Just(Action::Enter),
        Just(Action::Leave),
        (0..10u8).prop_map(Action::Tick),
    ]
}

proptest! {
    /// Exactly one slide and its paired indicator are active after every action
    #[test]
    fn test_single_active_pair(
        len in 1..8usize,
        actions in prop::collection::vec(action_strategy(), 0..60)
    ) {
        let (mut carousel, mut view) = carousel(len, 4.0);
        for action in actions {
            match action {
                Action::Next => carousel.next_clicked(&mut view),
                Action::Prev => carousel.previous_clicked(&mut view),
                Action::Dot(i) => carousel.indicator_clicked(i, &mut view),
                Action::Key(right) => {
                    let key = if right { KeyboardKey::KEY_RIGHT } else { KeyboardKey::KEY_LEFT };
                    carousel.key_pressed(key, &mut view);
                }
                Action::Enter => carousel.pointer_entered(),
                Action::Leave => carousel.pointer_left(),
                Action::Tick(seconds) => carousel.update(seconds as f32, &mut view),
            }
            prop_assert_eq!(view.active_slides(), vec![carousel.current_index()]);
            prop_assert_eq!(view.active_indicators(), vec![carousel.current_index()]);
            prop_assert!(carousel.current_index() < len);
        }
    }

    /// Any in-range target is selected exactly, any other wraps modulo N
    #[test]
    fn test_go_to_slide_wraps(len in 1..10usize, target in -30isize..30) {
        let (mut carousel, mut view) = carousel(len, 4.0);
        carousel.go_to_slide(target, &mut view);
        prop_assert_eq!(carousel.current_index(), target.rem_euclid(len as isize) as usize);
        if (0..len as isize).contains(&target) {
            prop_assert_eq!(carousel.current_index(), target as usize);
        }
    }

    /// Going to the active slide leaves the active pair unchanged
    #[test]
    fn test_go_to_current_is_idempotent(len in 1..10usize, start in 0..10usize) {
        let (mut carousel, mut view) = carousel(len, 4.0);
        carousel.go_to_slide(start as isize, &mut view);
        let before = (view.slides.clone(), view.indicators.clone());
        carousel.go_to_slide(carousel.current_index() as isize, &mut view);
        prop_assert_eq!((view.slides.clone(), view.indicators.clone()), before);
    }

    /// Without interaction, T ticks land on (initial + T) mod N
    #[test]
    fn test_auto_advance_counts_ticks(len in 1..10usize, initial in 0..10usize, ticks in 0..40usize) {
        let (mut carousel, mut view) = carousel(len, 2.0);
        carousel.go_to_slide(initial as isize, &mut view);
        let start = carousel.current_index();
        for _ in 0..ticks {
            carousel.update(2.0, &mut view);
        }
        prop_assert_eq!(carousel.current_index(), (start + ticks) % len);
    }

    /// No advance while the pointer stays inside, whatever the user clicks
    #[test]
    fn test_no_advance_while_hovered(
        len in 2..8usize,
        dots in prop::collection::vec(0..8usize, 0..10),
        wait in 0..100u32
    ) {
        let (mut carousel, mut view) = carousel(len, 4.0);
        carousel.pointer_entered();
        for dot in dots {
            carousel.indicator_clicked(dot, &mut view);
        }
        let index = carousel.current_index();
        carousel.update(wait as f32, &mut view);
        prop_assert_eq!(carousel.current_index(), index);
    }
}
