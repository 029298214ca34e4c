use yams_core::{BoardConfig, BoardDescriptor, DiceBoard, RenderFrame, ThrowSet};

fn board() -> DiceBoard {
    let descriptor = BoardDescriptor::with_dice(["1", "2", "3", "4", "5"])
        .play("roll")
        .play("hold");
    DiceBoard::new(&descriptor, BoardConfig::default())
}

fn assert_membership_tracks_held(board: &DiceBoard) {
    for selector in board.selectors() {
        assert_eq!(
            board.throw_set().contains(selector.index()),
            !selector.held(),
            "die {}",
            selector.index()
        );
    }
}

#[test]
fn initial_render_lists_every_die() {
    let board = board();
    assert_eq!(board.throw_set().as_slice(), &[0, 1, 2, 3, 4]);
    let frame = board.render_frame();
    assert_eq!(frame.value("roll"), Some("[0,1,2,3,4]"));
    assert_eq!(frame.value("hold"), Some("[0,1,2,3,4]"));
    assert_eq!(frame.selected, vec![false; 5]);
}

#[test]
fn holding_a_die_drops_it_from_the_throw() {
    let mut board = board();
    board.toggle(2).unwrap();
    assert_eq!(board.throw_set().as_slice(), &[0, 1, 3, 4]);
    let frame = board.render_frame();
    assert_eq!(frame.value("roll"), Some("[0,1,3,4]"));
    assert!(frame.is_selected(2));
    assert!(!frame.is_selected(1));
}

#[test]
fn releasing_a_die_appends_it_last() {
    let mut board = board();
    board.toggle(2).unwrap();
    board.toggle(2).unwrap();
    assert_eq!(board.throw_set().as_slice(), &[0, 1, 3, 4, 2]);
    let frame = board.render_frame();
    assert_eq!(frame.value("roll"), Some("[0,1,3,4,2]"));
    assert!(!frame.is_selected(2));
}

#[test]
fn interleaved_toggles_keep_toggle_order() {
    let mut board = board();
    board.toggle(0).unwrap();
    board.toggle(4).unwrap();
    board.toggle(0).unwrap();
    assert_eq!(board.throw_set().as_slice(), &[1, 2, 3, 0]);
    board.toggle(4).unwrap();
    assert_eq!(board.throw_set().as_slice(), &[1, 2, 3, 0, 4]);
}

#[test]
fn hold_release_cycle_on_first_die() {
    let mut board = board();
    board.toggle(0).unwrap();
    board.toggle(0).unwrap();
    assert_eq!(board.throw_set().as_slice(), &[1, 2, 3, 4, 0]);
}

#[test]
fn even_toggles_restore_held_and_membership() {
    for index in 0..5 {
        for pairs in 1..4 {
            let mut board = board();
            for _ in 0..pairs * 2 {
                board.toggle(index).unwrap();
            }
            assert!(!board.selectors()[index].held());
            assert!(board.throw_set().contains(index));
            assert_eq!(board.throw_set().len(), 5);
        }
    }
}

#[test]
fn membership_follows_held_after_every_toggle() {
    let mut board = board();
    let sequence = [3, 1, 3, 0, 4, 4, 2, 1, 0, 2, 2];
    for index in sequence {
        board.toggle(index).unwrap();
        assert_membership_tracks_held(&board);
    }
}

#[test]
fn rendering_twice_is_stable() {
    let mut board = board();
    board.toggle(1).unwrap();
    let first = board.render_frame();
    let mut second = first.clone();
    board.render_all(&mut second);
    assert_eq!(first, second);
    assert_eq!(first, board.render_frame());
}

#[test]
fn no_dice_renders_without_failing() {
    let descriptor = BoardDescriptor::default();
    let board = DiceBoard::new(&descriptor, BoardConfig::default());
    assert!(board.selectors().is_empty());
    let frame = board.render_frame();
    assert_eq!(frame, RenderFrame::default());
    assert_eq!(board.throw_set(), &ThrowSet::seeded(5));
}

#[test]
fn throw_set_is_seeded_before_dice_are_known() {
    let descriptor = BoardDescriptor::with_dice(["6", "6"]).play("roll");
    let board = DiceBoard::new(&descriptor, BoardConfig::default());
    assert_eq!(board.render_frame().value("roll"), Some("[0,1,2,3,4]"));
}

#[test]
fn malformed_die_value_is_kept() {
    let descriptor = BoardDescriptor::with_dice(["3", "three"]);
    let board = DiceBoard::new(&descriptor, BoardConfig::default());
    assert_eq!(board.selectors()[0].value().as_number(), Some(3));
    assert_eq!(board.selectors()[1].value().as_number(), None);
    assert_eq!(
        board.selectors()[1].to_string(),
        "{<DieSelector> held: false, value: NaN}"
    );
}
