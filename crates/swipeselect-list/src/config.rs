//! Arbitration thresholds and the selection title template.

use crate::error::ConfigError;
use std::time::Duration;
use swipeselect_foundation::gesture_constants::{
    ARM_WIDTH_DIVISOR, DRAG_COMMIT_SLOP_MULTIPLIER, HORIZONTAL_FRAME_RATIO, LONG_PRESS_TIMEOUT,
    MAX_VERTICAL_DRAG_TRAVEL, RETURN_HOME_DURATION, TOUCH_SLOP,
};

/// Tunable thresholds for gesture arbitration. Defaults come from
/// [`swipeselect_foundation::gesture_constants`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub touch_slop: f32,
    pub max_vertical_travel: f32,
    pub slop_multiplier: f32,
    pub frame_axis_ratio: f32,
    pub arm_width_divisor: f32,
    pub long_press_timeout: Duration,
    pub return_home_duration: Duration,
}

impl GestureConfig {
    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    pub fn with_max_vertical_travel(mut self, travel: f32) -> Self {
        self.max_vertical_travel = travel;
        self
    }

    pub fn with_slop_multiplier(mut self, multiplier: f32) -> Self {
        self.slop_multiplier = multiplier;
        self
    }

    pub fn with_frame_axis_ratio(mut self, ratio: f32) -> Self {
        self.frame_axis_ratio = ratio;
        self
    }

    pub fn with_arm_width_divisor(mut self, divisor: f32) -> Self {
        self.arm_width_divisor = divisor;
        self
    }

    pub fn with_long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }

    pub fn with_return_home_duration(mut self, duration: Duration) -> Self {
        self.return_home_duration = duration;
        self
    }

    /// Cumulative horizontal travel past which a gesture is too late to
    /// commit to a drag.
    pub fn max_commit_travel(&self) -> f32 {
        self.touch_slop * self.slop_multiplier
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("touch_slop", self.touch_slop),
            ("max_vertical_travel", self.max_vertical_travel),
            ("slop_multiplier", self.slop_multiplier),
            ("frame_axis_ratio", self.frame_axis_ratio),
            ("arm_width_divisor", self.arm_width_divisor),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }
        if self.long_press_timeout.is_zero() {
            return Err(ConfigError::ZeroLongPressTimeout);
        }
        Ok(())
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: TOUCH_SLOP,
            max_vertical_travel: MAX_VERTICAL_DRAG_TRAVEL,
            slop_multiplier: DRAG_COMMIT_SLOP_MULTIPLIER,
            frame_axis_ratio: HORIZONTAL_FRAME_RATIO,
            arm_width_divisor: ARM_WIDTH_DIVISOR,
            long_press_timeout: LONG_PRESS_TIMEOUT,
            return_home_duration: RETURN_HOME_DURATION,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum TemplatePart {
    Literal(String),
    Count,
}

/// Selection toolbar title, e.g. `"{count} selected"`.
///
/// `{count}` is replaced by the number of selected rows; `{{` and `}}` stand
/// for literal braces. Parsed once so formatting on every toggle can't fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleTemplate {
    source: String,
    parts: Vec<TemplatePart>,
}

impl TitleTemplate {
    pub const DEFAULT: &'static str = "{count} selected";

    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let mut parts = Vec::new();
        let mut literal = String::new();
        let mut has_count = false;
        let mut chars = template.char_indices().peekable();

        while let Some((position, ch)) = chars.next() {
            let next = chars.peek().map(|(_, next)| *next);
            match ch {
                '{' if next == Some('{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if next == Some('}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut name = String::new();
                    let mut closed = false;
                    for (_, inner) in chars.by_ref() {
                        if inner == '}' {
                            closed = true;
                            break;
                        }
                        name.push(inner);
                    }
                    if !closed {
                        return Err(ConfigError::UnbalancedBrace {
                            template: template.to_owned(),
                            position,
                        });
                    }
                    if name != "count" {
                        return Err(ConfigError::UnknownPlaceholder {
                            template: template.to_owned(),
                            name,
                        });
                    }
                    if !literal.is_empty() {
                        parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(TemplatePart::Count);
                    has_count = true;
                }
                '}' => {
                    return Err(ConfigError::UnbalancedBrace {
                        template: template.to_owned(),
                        position,
                    });
                }
                other => literal.push(other),
            }
        }
        if !literal.is_empty() {
            parts.push(TemplatePart::Literal(literal));
        }
        if !has_count {
            return Err(ConfigError::MissingCountPlaceholder {
                template: template.to_owned(),
            });
        }

        Ok(Self {
            source: template.to_owned(),
            parts,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn format(&self, count: usize) -> String {
        let mut title = String::with_capacity(self.source.len() + 4);
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => title.push_str(text),
                TemplatePart::Count => title.push_str(&count.to_string()),
            }
        }
        title
    }
}

impl Default for TitleTemplate {
    fn default() -> Self {
        Self {
            source: Self::DEFAULT.to_owned(),
            parts: vec![
                TemplatePart::Count,
                TemplatePart::Literal(" selected".to_owned()),
            ],
        }
    }
}
