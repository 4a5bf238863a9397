use crate::ui::transition::SlideDirection;
use crate::ui::Button;

/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected % item_count + item_count - 1) % item_count
}

/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected % item_count + 1) % item_count
}

/// Slide direction for a top-level menu move from `last_index` to `index`.
///
/// A move to a lower index is rightward, and so is the wrap from the first
/// entry to the last. Everything else is leftward.
pub fn menu_slide_direction(index: usize, last_index: usize, entry_count: usize) -> SlideDirection {
    let backward_wrap = last_index == 0 && entry_count > 0 && index == entry_count - 1;
    if index < last_index || backward_wrap {
        SlideDirection::Rightward
    } else {
        SlideDirection::Leftward
    }
}

/// Slide direction inside a list, taken from the button alone.
pub fn press_direction(button: Button) -> Option<SlideDirection> {
    match button {
        Button::Up => Some(SlideDirection::Rightward),
        Button::Down => Some(SlideDirection::Leftward),
        Button::Confirm | Button::Back => None,
    }
}
