//! Blueprint: a declarative description of a layout tree.
//!
//! Building from a blueprint is the checked way to assemble a tree. Every
//! structural mistake is reported as a [`LayoutError`] before any node
//! exists, so layout and draw never have to deal with a malformed tree.
//!
//! # Example
//!
//! ```rust
//! use panecraft::layout::{Axis, Rect};
//! use panecraft::node::{Blueprint, SplitterConfig};
//!
//! let tree = Blueprint::Splitter {
//!     rect: Rect::new(0, 0, 80, 24),
//!     config: SplitterConfig { axis: Axis::Horizontal, ..SplitterConfig::default() },
//!     children: vec![Blueprint::fixed(Rect::ZERO), Blueprint::fixed(Rect::ZERO)],
//! }
//! .build()
//! .unwrap();
//! assert_eq!(tree.local_rect(), Rect::new(0, 0, 80, 24));
//! ```

use super::dynamic_box::{DynamicBox, Positioning};
use super::fixed::FixedContainer;
use super::portal::{Portal, PortalConfig};
use super::splitter::{Splitter, SplitterConfig};
use super::traits::UiNode;
use crate::buffer::Rgb;
use crate::error::LayoutError;
use crate::layout::{Axis, Point, Rect};

/// Description of one node and its subtree.
#[derive(Debug, Clone, PartialEq)]
pub enum Blueprint {
    /// A [`FixedContainer`].
    Fixed {
        /// Parent-relative rectangle.
        rect: Rect,
        /// Background fill.
        fill: Option<Rgb>,
        /// Label text and color.
        label: Option<(String, Rgb)>,
    },
    /// A [`DynamicBox`].
    DynamicBox {
        /// Stacking axis.
        axis: Axis,
        /// Position inside the parent.
        origin: Point,
        /// Children in insertion order.
        children: Vec<(Positioning, Blueprint)>,
    },
    /// A [`Splitter`]; `children` must hold exactly two entries.
    Splitter {
        /// Parent-relative rectangle.
        rect: Rect,
        /// Split settings.
        config: SplitterConfig,
        /// First and second child.
        children: Vec<Blueprint>,
    },
    /// A [`Portal`].
    Portal {
        /// Parent-relative rectangle.
        rect: Rect,
        /// Portal settings.
        config: PortalConfig,
        /// Wrapped content.
        child: Option<Box<Blueprint>>,
    },
}

impl Blueprint {
    /// A bare fixed container.
    pub const fn fixed(rect: Rect) -> Self {
        Self::Fixed {
            rect,
            fill: None,
            label: None,
        }
    }

    /// Build the described tree.
    pub fn build(self) -> Result<Box<dyn UiNode>, LayoutError> {
        match self {
            Self::Fixed { rect, fill, label } => {
                check_size(rect)?;
                let mut node = FixedContainer::new(rect);
                if let Some(color) = fill {
                    node = node.with_fill(color);
                }
                if let Some((text, fg)) = label {
                    node = node.with_label(text, fg);
                }
                Ok(Box::new(node))
            }
            Self::DynamicBox {
                axis,
                origin,
                children,
            } => {
                let mut node = DynamicBox::new(axis);
                node.set_local_pos(origin);
                for (positioning, child) in children {
                    node.add_child(child.build()?, positioning);
                }
                Ok(Box::new(node))
            }
            Self::Splitter {
                rect,
                config,
                children,
            } => {
                check_size(rect)?;
                check_split(&config)?;
                let count = children.len();
                let Ok([first, second]) = <[Blueprint; 2]>::try_from(children) else {
                    return Err(LayoutError::SplitterArity(count));
                };
                Ok(Box::new(Splitter::new(
                    rect,
                    config,
                    first.build()?,
                    second.build()?,
                )))
            }
            Self::Portal {
                rect,
                config,
                child,
            } => {
                check_size(rect)?;
                if config.max_passes == 0 {
                    return Err(LayoutError::NoDrawPasses);
                }
                let mut node = Portal::new(rect, config);
                if let Some(child) = child {
                    node.set_child(child.build()?);
                }
                Ok(Box::new(node))
            }
        }
    }
}

fn check_size(rect: Rect) -> Result<(), LayoutError> {
    if rect.size.width < 0 || rect.size.height < 0 {
        return Err(LayoutError::NegativeSize {
            width: rect.size.width,
            height: rect.size.height,
        });
    }
    Ok(())
}

fn check_split(config: &SplitterConfig) -> Result<(), LayoutError> {
    if !config.split_percentage.is_finite() {
        return Err(LayoutError::InvalidSplitPercentage(config.split_percentage));
    }
    if !config.split_region_pixels.is_finite() || config.split_region_pixels < 0.0 {
        return Err(LayoutError::InvalidSplitRegion(config.split_region_pixels));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Size;

    fn split(children: Vec<Blueprint>) -> Blueprint {
        Blueprint::Splitter {
            rect: Rect::new(0, 0, 100, 200),
            config: SplitterConfig {
                axis: Axis::Vertical,
                split_percentage: 0.25,
                split_region_pixels: 1.0,
            },
            children,
        }
    }

    #[test]
    fn test_build_splitter() {
        let node = split(vec![Blueprint::fixed(Rect::ZERO), Blueprint::fixed(Rect::ZERO)])
            .build()
            .unwrap();
        assert_eq!(node.local_rect().size, Size::new(100, 200));
    }

    #[test]
    fn test_splitter_arity_rejected() {
        let err = split(vec![Blueprint::fixed(Rect::ZERO)]).build().unwrap_err();
        assert_eq!(err, LayoutError::SplitterArity(1));

        let three = vec![Blueprint::fixed(Rect::ZERO); 3];
        assert_eq!(split(three).build().unwrap_err(), LayoutError::SplitterArity(3));
    }

    #[test]
    fn test_nan_split_rejected() {
        let bp = Blueprint::Splitter {
            rect: Rect::new(0, 0, 10, 10),
            config: SplitterConfig {
                split_percentage: f32::NAN,
                ..SplitterConfig::default()
            },
            children: vec![Blueprint::fixed(Rect::ZERO), Blueprint::fixed(Rect::ZERO)],
        };
        assert!(matches!(
            bp.build().unwrap_err(),
            LayoutError::InvalidSplitPercentage(_)
        ));
    }

    #[test]
    fn test_negative_band_rejected() {
        let bp = Blueprint::Splitter {
            rect: Rect::new(0, 0, 10, 10),
            config: SplitterConfig {
                split_region_pixels: -1.0,
                ..SplitterConfig::default()
            },
            children: vec![Blueprint::fixed(Rect::ZERO), Blueprint::fixed(Rect::ZERO)],
        };
        assert_eq!(bp.build().unwrap_err(), LayoutError::InvalidSplitRegion(-1.0));
    }

    #[test]
    fn test_nested_error_surfaces() {
        let bp = Blueprint::DynamicBox {
            axis: Axis::Horizontal,
            origin: Point::ZERO,
            children: vec![(
                Positioning::Dynamic,
                Blueprint::fixed(Rect::new(0, 0, -1, 4)),
            )],
        };
        assert_eq!(
            bp.build().unwrap_err(),
            LayoutError::NegativeSize {
                width: -1,
                height: 4
            }
        );
    }

    #[test]
    fn test_portal_without_passes_rejected() {
        let bp = Blueprint::Portal {
            rect: Rect::new(0, 0, 4, 4),
            config: PortalConfig {
                max_passes: 0,
                ..PortalConfig::default()
            },
            child: None,
        };
        assert_eq!(bp.build().unwrap_err(), LayoutError::NoDrawPasses);
    }

    #[test]
    fn test_built_box_lays_out() {
        let bp = Blueprint::DynamicBox {
            axis: Axis::Horizontal,
            origin: Point::new(1, 0),
            children: vec![
                (Positioning::Dynamic, Blueprint::fixed(Rect::new(0, 0, 10, 20))),
                (Positioning::Dynamic, Blueprint::fixed(Rect::new(0, 0, 30, 5))),
            ],
        };
        let mut node = bp.build().unwrap();
        assert_eq!(node.calculate_dimensions(Point::ZERO), Rect::new(1, 0, 40, 20));
    }
}
