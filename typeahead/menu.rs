//! Selection state machine: wraparound navigation and the scroll rules that
//! keep the highlight visible.
//!
//! Everything here is pure index/pixel arithmetic; the completer applies
//! the results through the surface. Wraparound avoids dead-ending at list
//! boundaries, and the scroll rules move the view only as far as needed so
//! long lists keep their visual context.

/// Next highlight index for a downward step. `None` (nothing highlighted)
/// steps onto the first item; stepping past the end wraps to the top.
pub fn next_index(selected: Option<usize>, count: usize) -> Option<usize> {
  if count == 0 {
    return None;
  }
  match selected {
    Some(current) if current + 1 < count => Some(current + 1),
    _ => Some(0),
  }
}

/// Next highlight index for an upward step. `None` and the first item both
/// wrap to the last item.
pub fn prev_index(selected: Option<usize>, count: usize) -> Option<usize> {
  if count == 0 {
    return None;
  }
  match selected {
    Some(current) if current > 0 => Some(current - 1),
    _ => Some(count - 1),
  }
}

/// Scroll correction after a downward step to an item at `offset`.
///
/// An item past the visible bottom gets its bottom aligned with the panel's
/// visible bottom; an item at the very top snaps the view back to the top.
/// `None` leaves the current scroll position alone.
pub fn scroll_after_down(offset: f32, item_height: f32, panel_height: f32) -> Option<f32> {
  if offset > panel_height - item_height {
    Some(offset + item_height - panel_height)
  } else if offset == 0.0 {
    Some(0.0)
  } else {
    None
  }
}

/// Scroll correction after an upward step: any item not exactly at the
/// current scroll position — above or below — becomes the new scroll
/// position.
pub fn scroll_after_up(offset: f32, scroll_top: f32) -> Option<f32> {
  (offset != scroll_top).then_some(offset)
}

#[cfg(test)]
mod tests {
  use quickcheck::{
    TestResult,
    quickcheck,
  };

  use super::*;

  #[test]
  fn down_walks_the_list_then_wraps() {
    let mut selected = None;
    let mut seen = Vec::new();
    for _ in 0..4 {
      selected = next_index(selected, 3);
      seen.push(selected.unwrap());
    }
    assert_eq!(seen, vec![0, 1, 2, 0]);
  }

  #[test]
  fn up_from_the_top_wraps_to_the_last_item() {
    assert_eq!(prev_index(None, 3), Some(2));
    assert_eq!(prev_index(Some(0), 3), Some(2));
    assert_eq!(prev_index(Some(2), 3), Some(1));
  }

  #[test]
  fn empty_list_never_selects() {
    assert_eq!(next_index(None, 0), None);
    assert_eq!(prev_index(Some(1), 0), None);
  }

  quickcheck! {
    fn down_always_lands_in_range(selected: Option<usize>, count: usize) -> TestResult {
      if count == 0 {
        return TestResult::discard();
      }
      TestResult::from_bool(next_index(selected, count).unwrap() < count)
    }

    fn up_always_lands_in_range(selected: Option<usize>, count: usize) -> TestResult {
      if count == 0 {
        return TestResult::discard();
      }
      TestResult::from_bool(prev_index(selected, count).unwrap() < count)
    }

    fn single_item_always_selects_it(selected: Option<usize>) -> bool {
      next_index(selected, 1) == Some(0) && prev_index(selected, 1) == Some(0)
    }

    fn down_from_last_wraps_to_first(count: usize) -> TestResult {
      if count == 0 {
        return TestResult::discard();
      }
      TestResult::from_bool(next_index(Some(count - 1), count) == Some(0))
    }
  }

  #[test]
  fn down_past_visible_bottom_aligns_item_bottom() {
    // Item at offset 180 in a 100-tall panel with 20-tall rows.
    assert_eq!(scroll_after_down(180.0, 20.0, 100.0), Some(100.0));
  }

  #[test]
  fn down_to_first_item_snaps_to_top() {
    assert_eq!(scroll_after_down(0.0, 20.0, 100.0), Some(0.0));
  }

  #[test]
  fn down_within_view_leaves_scroll_alone() {
    assert_eq!(scroll_after_down(40.0, 20.0, 100.0), None);
  }

  #[test]
  fn up_scrolls_to_any_off_position_item() {
    assert_eq!(scroll_after_up(20.0, 60.0), Some(20.0));
    assert_eq!(scroll_after_up(80.0, 60.0), Some(80.0));
    assert_eq!(scroll_after_up(60.0, 60.0), None);
  }
}
