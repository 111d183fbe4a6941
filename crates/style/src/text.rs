use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// Horizontal offset of a line of `line_width` inside a box of `box_width`.
    pub fn offset(self, box_width: f32, line_width: f32) -> f32 {
        match self {
            TextAlign::Left => 0.0,
            TextAlign::Center => (box_width - line_width) / 2.0,
            TextAlign::Right => box_width - line_width,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

impl VerticalAlign {
    pub fn offset(self, box_height: f32, content_height: f32) -> f32 {
        match self {
            VerticalAlign::Top => 0.0,
            VerticalAlign::Middle => (box_height - content_height) / 2.0,
            VerticalAlign::Bottom => box_height - content_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_align_offsets() {
        assert_eq!(TextAlign::Left.offset(50.0, 20.0), 0.0);
        assert_eq!(TextAlign::Center.offset(50.0, 20.0), 15.0);
        assert_eq!(TextAlign::Right.offset(50.0, 20.0), 30.0);
    }

    #[test]
    fn test_vertical_align_offsets() {
        assert_eq!(VerticalAlign::Top.offset(10.0, 4.0), 0.0);
        assert_eq!(VerticalAlign::Middle.offset(10.0, 4.0), 3.0);
        assert_eq!(VerticalAlign::Bottom.offset(10.0, 4.0), 6.0);
    }

    #[test]
    fn test_deserialize_keywords() {
        let a: TextAlign = serde_json::from_str("\"center\"").unwrap();
        assert_eq!(a, TextAlign::Center);
        let v: VerticalAlign = serde_json::from_str("\"middle\"").unwrap();
        assert_eq!(v, VerticalAlign::Middle);
    }
}
