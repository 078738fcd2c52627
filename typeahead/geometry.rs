//! Panel placement math over the abstract geometry provider.

/// Measurement capability for the input and its surroundings, in document
/// pixels. Consumed, never implemented here.
pub trait Geometry {
  /// The input's cumulative document offset, `(x, y)`.
  fn input_origin(&self) -> (f32, f32);

  /// The input's rendered size, `(width, height)`.
  fn input_size(&self) -> (f32, f32);

  /// Cumulative vertical scroll of the input's ancestor containers.
  fn scroll_offset(&self) -> f32;

  fn viewport_height(&self) -> f32;
}

/// Where the panel goes and how big it may get. Recomputed before every
/// show and on every ancestor scroll / window resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelPlacement {
  pub left:       f32,
  pub top:        f32,
  /// The panel never renders narrower than the input.
  pub min_width:  f32,
  /// The panel never exceeds the viewport space below the field.
  pub max_height: f32,
}

pub fn compute_placement(geometry: &dyn Geometry) -> PanelPlacement {
  let (left, origin_y) = geometry.input_origin();
  let (input_width, input_height) = geometry.input_size();
  let top = origin_y + input_height - geometry.scroll_offset();

  PanelPlacement {
    left,
    top,
    min_width: input_width,
    max_height: geometry.viewport_height() - (top + input_height),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct FixedGeometry;

  impl Geometry for FixedGeometry {
    fn input_origin(&self) -> (f32, f32) {
      (10.0, 20.0)
    }

    fn input_size(&self) -> (f32, f32) {
      (200.0, 30.0)
    }

    fn scroll_offset(&self) -> f32 {
      5.0
    }

    fn viewport_height(&self) -> f32 {
      600.0
    }
  }

  #[test]
  fn placement_sits_under_the_input() {
    let placement = compute_placement(&FixedGeometry);
    assert_eq!(placement.left, 10.0);
    assert_eq!(placement.top, 45.0);
    assert_eq!(placement.min_width, 200.0);
    assert_eq!(placement.max_height, 525.0);
  }
}
