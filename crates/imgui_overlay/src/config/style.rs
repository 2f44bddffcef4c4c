//! GUI style table
//!
//! Cosmetic values pushed into the GUI library once, when the context is
//! created. The defaults are a flat dark theme with square corners.

use serde::{Deserialize, Serialize};

/// Direction used for arrow-like style placements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleDir {
    /// No direction
    None,
    /// Left side
    Left,
    /// Right side
    Right,
    /// Top side
    Up,
    /// Bottom side
    Down,
}

/// Styleable color slots, in the GUI library's slot order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum StyleColor {
    Text,
    TextDisabled,
    WindowBg,
    ChildBg,
    PopupBg,
    Border,
    BorderShadow,
    FrameBg,
    FrameBgHovered,
    FrameBgActive,
    TitleBg,
    TitleBgActive,
    TitleBgCollapsed,
    MenuBarBg,
    ScrollbarBg,
    ScrollbarGrab,
    ScrollbarGrabHovered,
    ScrollbarGrabActive,
    CheckMark,
    SliderGrab,
    SliderGrabActive,
    Button,
    ButtonHovered,
    ButtonActive,
    Header,
    HeaderHovered,
    HeaderActive,
    Separator,
    SeparatorHovered,
    SeparatorActive,
    ResizeGrip,
    ResizeGripHovered,
    ResizeGripActive,
    Tab,
    TabHovered,
    TabSelected,
    TabDimmed,
    TabDimmedSelected,
    PlotLines,
    PlotLinesHovered,
    PlotHistogram,
    PlotHistogramHovered,
    TableHeaderBg,
    TableBorderStrong,
    TableBorderLight,
    TableRowBg,
    TableRowBgAlt,
    TextSelectedBg,
    DragDropTarget,
    NavHighlight,
    NavWindowingHighlight,
    NavWindowingDimBg,
    ModalWindowDimBg,
}

/// One entry of the color table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleColorEntry {
    /// Slot being colored
    pub slot: StyleColor,
    /// Normalized RGBA
    pub rgba: [f32; 4],
}

/// Style table applied to the GUI context
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
#[allow(missing_docs)]
pub struct StyleConfig {
    pub alpha: f32,
    pub disabled_alpha: f32,
    pub window_padding: [f32; 2],
    pub window_rounding: f32,
    pub window_border_size: f32,
    pub window_min_size: [f32; 2],
    pub window_title_align: [f32; 2],
    pub window_menu_button_position: StyleDir,
    pub child_rounding: f32,
    pub child_border_size: f32,
    pub popup_rounding: f32,
    pub popup_border_size: f32,
    pub frame_padding: [f32; 2],
    pub frame_rounding: f32,
    pub frame_border_size: f32,
    pub item_spacing: [f32; 2],
    pub item_inner_spacing: [f32; 2],
    pub cell_padding: [f32; 2],
    pub indent_spacing: f32,
    pub columns_min_spacing: f32,
    pub scrollbar_size: f32,
    pub scrollbar_rounding: f32,
    pub grab_min_size: f32,
    pub grab_rounding: f32,
    pub tab_rounding: f32,
    pub tab_border_size: f32,
    pub tab_min_width_for_close_button: f32,
    pub color_button_position: StyleDir,
    pub button_text_align: [f32; 2],
    pub selectable_text_align: [f32; 2],
    pub colors: Vec<StyleColorEntry>,
}

impl StyleConfig {
    /// Color assigned to `slot`, if the table sets one
    pub fn color(&self, slot: StyleColor) -> Option<[f32; 4]> {
        self.colors.iter().find(|entry| entry.slot == slot).map(|entry| entry.rgba)
    }

    /// Set or replace the color of `slot`
    pub fn set_color(&mut self, slot: StyleColor, rgba: [f32; 4]) {
        match self.colors.iter_mut().find(|entry| entry.slot == slot) {
            Some(entry) => entry.rgba = rgba,
            None => self.colors.push(StyleColorEntry { slot, rgba }),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            disabled_alpha: 0.6,
            window_padding: [8.0, 8.0],
            window_rounding: 0.0,
            window_border_size: 1.0,
            window_min_size: [32.0, 32.0],
            window_title_align: [0.0, 0.5],
            window_menu_button_position: StyleDir::Left,
            child_rounding: 0.0,
            child_border_size: 1.0,
            popup_rounding: 0.0,
            popup_border_size: 1.0,
            frame_padding: [4.0, 3.0],
            frame_rounding: 0.0,
            frame_border_size: 0.0,
            item_spacing: [8.0, 4.0],
            item_inner_spacing: [4.0, 4.0],
            cell_padding: [4.0, 2.0],
            indent_spacing: 21.0,
            columns_min_spacing: 6.0,
            scrollbar_size: 14.0,
            scrollbar_rounding: 9.0,
            grab_min_size: 10.0,
            grab_rounding: 0.0,
            tab_rounding: 4.0,
            tab_border_size: 0.0,
            tab_min_width_for_close_button: 0.0,
            color_button_position: StyleDir::Right,
            button_text_align: [0.5, 0.5],
            selectable_text_align: [0.0, 0.0],
            colors: DEFAULT_COLORS
                .iter()
                .map(|&(slot, rgba)| StyleColorEntry { slot, rgba })
                .collect(),
        }
    }
}

const DEFAULT_COLORS: &[(StyleColor, [f32; 4])] = &[
    (StyleColor::Text, [1.0, 1.0, 1.0, 1.0]),
    (StyleColor::TextDisabled, [0.49803922, 0.49803922, 0.49803922, 1.0]),
    (StyleColor::WindowBg, [0.05882353, 0.05882353, 0.05882353, 0.94]),
    (StyleColor::ChildBg, [1.0, 1.0, 1.0, 0.0]),
    (StyleColor::PopupBg, [0.078431375, 0.078431375, 0.078431375, 0.94]),
    (StyleColor::Border, [0.42745098, 0.42745098, 0.49803922, 0.5]),
    (StyleColor::BorderShadow, [0.0, 0.0, 0.0, 0.0]),
    (StyleColor::FrameBg, [0.2, 0.20784314, 0.21960784, 0.54]),
    (StyleColor::FrameBgHovered, [0.4, 0.4, 0.4, 0.4]),
    (StyleColor::FrameBgActive, [0.1764706, 0.1764706, 0.1764706, 0.67]),
    (StyleColor::TitleBg, [0.039215688, 0.039215688, 0.039215688, 1.0]),
    (StyleColor::TitleBgActive, [0.28627452, 0.28627452, 0.28627452, 1.0]),
    (StyleColor::TitleBgCollapsed, [0.0, 0.0, 0.0, 0.51]),
    (StyleColor::MenuBarBg, [0.13725491, 0.13725491, 0.13725491, 1.0]),
    (StyleColor::ScrollbarBg, [0.019607844, 0.019607844, 0.019607844, 0.53]),
    (StyleColor::ScrollbarGrab, [0.30980393, 0.30980393, 0.30980393, 1.0]),
    (StyleColor::ScrollbarGrabHovered, [0.40784314, 0.40784314, 0.40784314, 1.0]),
    (StyleColor::ScrollbarGrabActive, [0.50980395, 0.50980395, 0.50980395, 1.0]),
    (StyleColor::CheckMark, [0.9372549, 0.9372549, 0.9372549, 1.0]),
    (StyleColor::SliderGrab, [0.50980395, 0.50980395, 0.50980395, 1.0]),
    (StyleColor::SliderGrabActive, [0.85882354, 0.85882354, 0.85882354, 1.0]),
    (StyleColor::Button, [0.4392157, 0.4392157, 0.4392157, 0.4]),
    (StyleColor::ButtonHovered, [0.45882353, 0.46666667, 0.47843137, 1.0]),
    (StyleColor::ButtonActive, [0.41960785, 0.41960785, 0.41960785, 1.0]),
    (StyleColor::Header, [0.69803923, 0.69803923, 0.69803923, 0.31]),
    (StyleColor::HeaderHovered, [0.69803923, 0.69803923, 0.69803923, 0.8]),
    (StyleColor::HeaderActive, [0.47843137, 0.49803922, 0.5176471, 1.0]),
    (StyleColor::Separator, [0.42745098, 0.42745098, 0.49803922, 0.5]),
    (StyleColor::SeparatorHovered, [0.7176471, 0.7176471, 0.7176471, 0.78]),
    (StyleColor::SeparatorActive, [0.50980395, 0.50980395, 0.50980395, 1.0]),
    (StyleColor::ResizeGrip, [0.9098039, 0.9098039, 0.9098039, 0.25]),
    (StyleColor::ResizeGripHovered, [0.80784315, 0.80784315, 0.80784315, 0.67]),
    (StyleColor::ResizeGripActive, [0.45882353, 0.45882353, 0.45882353, 0.95]),
    (StyleColor::Tab, [0.1764706, 0.34901962, 0.5764706, 0.862]),
    (StyleColor::TabHovered, [0.25882354, 0.5882353, 0.9764706, 0.8]),
    (StyleColor::TabSelected, [0.19607843, 0.40784314, 0.6784314, 1.0]),
    (StyleColor::TabDimmed, [0.06666667, 0.101960786, 0.14509805, 0.9724]),
    (StyleColor::TabDimmedSelected, [0.13333334, 0.25882354, 0.42352942, 1.0]),
    (StyleColor::PlotLines, [0.60784316, 0.60784316, 0.60784316, 1.0]),
    (StyleColor::PlotLinesHovered, [1.0, 0.42745098, 0.34901962, 1.0]),
    (StyleColor::PlotHistogram, [0.7294118, 0.6, 0.14901961, 1.0]),
    (StyleColor::PlotHistogramHovered, [1.0, 0.6, 0.0, 1.0]),
    (StyleColor::TableHeaderBg, [0.1882353, 0.1882353, 0.2, 1.0]),
    (StyleColor::TableBorderStrong, [0.30980393, 0.30980393, 0.34901962, 1.0]),
    (StyleColor::TableBorderLight, [0.22745098, 0.22745098, 0.24705882, 1.0]),
    (StyleColor::TableRowBg, [0.0, 0.0, 0.0, 0.0]),
    (StyleColor::TableRowBgAlt, [1.0, 1.0, 1.0, 0.06]),
    (StyleColor::TextSelectedBg, [0.8666667, 0.8666667, 0.8666667, 0.35]),
    (StyleColor::DragDropTarget, [1.0, 1.0, 0.0, 0.9]),
    (StyleColor::NavHighlight, [0.6, 0.6, 0.6, 1.0]),
    (StyleColor::NavWindowingHighlight, [1.0, 1.0, 1.0, 0.7]),
    (StyleColor::NavWindowingDimBg, [0.8, 0.8, 0.8, 0.2]),
    (StyleColor::ModalWindowDimBg, [0.8, 0.8, 0.8, 0.35]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_colors_every_slot_once() {
        let style = StyleConfig::default();
        let mut slots: Vec<_> = style.colors.iter().map(|entry| entry.slot).collect();
        slots.sort();
        slots.dedup();
        assert_eq!(slots.len(), style.colors.len());
        assert_eq!(style.color(StyleColor::Text), Some([1.0, 1.0, 1.0, 1.0]));
    }

    #[test]
    fn test_set_color_replaces_existing_entry() {
        let mut style = StyleConfig::default();
        let count = style.colors.len();
        style.set_color(StyleColor::WindowBg, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(style.colors.len(), count);
        assert_eq!(style.color(StyleColor::WindowBg), Some([0.0, 0.0, 0.0, 1.0]));
    }
}
