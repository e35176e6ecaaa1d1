use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::Frame;

use pagedot_core::{layout, Dot, Indicator, Marker, Orientation, Rgb, Size};

use crate::app::App;
use crate::theme;

/// Paints the indicator strip from the core's render attributes.
///
/// One layout unit maps to one terminal cell along the strip's axis. The
/// widget records where it drew the strip into `app.strip` so mouse input
/// can be translated back into strip-local units.
pub struct IndicatorWidget;

impl IndicatorWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        if !app.indicator.visible() || area.width == 0 || area.height == 0 {
            app.strip = None;
            return;
        }

        let dots = app.indicator.frame();
        let size = app
            .indicator
            .measure(Size::new(area.width as f32, area.height as f32));
        let ind = app.indicator.indicator();
        let idle = ind.idle();
        let buf = frame.buffer_mut();

        let strip = match ind.orientation() {
            Orientation::Horizontal => {
                let width = (size.width.ceil() as u16).min(area.width).max(1);
                let height = 2u16.min(area.height);
                let x = area.x + (area.width - width) / 2;
                let y = area.y + area.height - height;
                Rect::new(x, y, width, height)
            }
            Orientation::Vertical => {
                let height = (size.height.ceil() as u16).min(area.height).max(1);
                let width = 2u16.min(area.width);
                let x = area.x + (area.width - width) / 2;
                let y = area.y + (area.height - height) / 2;
                Rect::new(x, y, width, height)
            }
        };

        for (i, dot) in dots.dots.iter().enumerate() {
            let Some(glyph) = dot_glyph(dot) else {
                continue;
            };
            let color = dot_color(ind, dot.blend, idle, app.theme.bg_mix);
            let center = layout::center(ind, i);
            put(
                buf,
                strip,
                ind.orientation(),
                along(ind.orientation(), center) + dot.offset,
                dot.lift,
                glyph,
                color,
            );
        }

        if let Some(marker) = dots.marker {
            let color = dot_color(ind, 1.0, idle, app.theme.bg_mix);
            match marker {
                Marker::Span { from, to, thickness } => {
                    let glyph = span_glyph(ind, thickness);
                    let radius = ind.radius();
                    let mut pos = from - radius;
                    while pos <= to + radius {
                        put(buf, strip, ind.orientation(), pos, 0.0, glyph, color);
                        pos += 1.0;
                    }
                }
                Marker::Dot { center, lift, scale } => {
                    let glyph = if scale >= 0.85 { '●' } else { '•' };
                    put(buf, strip, ind.orientation(), center, lift, glyph, color);
                }
            }
        }

        app.strip = Some(strip);
    }
}

/// Glyph for a dot, by outline and animated scale. Dots scaled away to
/// nothing are skipped.
fn dot_glyph(dot: &Dot) -> Option<char> {
    if dot.stroke > 0.0 {
        Some('○')
    } else if dot.scale >= 0.85 {
        Some('●')
    } else if dot.scale >= 0.55 {
        Some('•')
    } else if dot.scale > 0.05 {
        Some('·')
    } else {
        None
    }
}

fn span_glyph(ind: &Indicator, thickness: f32) -> char {
    if thickness < ind.radius() * 2.0 {
        match ind.orientation() {
            Orientation::Horizontal => '─',
            Orientation::Vertical => '│',
        }
    } else {
        match ind.orientation() {
            Orientation::Horizontal => '━',
            Orientation::Vertical => '┃',
        }
    }
}

/// Blend the configured dot colors, dimming toward the background while
/// the strip is idle-faded.
fn dot_color(ind: &Indicator, blend: f32, idle: bool, bg: Rgb) -> Color {
    let mut rgb = ind.unselected_color().mix(ind.selected_color(), blend);
    if idle {
        rgb = rgb.mix(bg, 0.6);
    }
    theme::color(rgb)
}

fn along(orientation: Orientation, center: pagedot_core::Point) -> f32 {
    match orientation {
        Orientation::Horizontal => center.x,
        Orientation::Vertical => center.y,
    }
}

/// Place one glyph at an along-axis position (strip-local units) with a
/// perpendicular lift. Horizontal strips keep their dots on the bottom row
/// and lift onto the row above; vertical strips lift sideways.
fn put(
    buf: &mut Buffer,
    strip: Rect,
    orientation: Orientation,
    along: f32,
    lift: f32,
    glyph: char,
    color: Color,
) {
    let axis = along.floor();
    if axis < 0.0 {
        return;
    }
    let axis = axis as u16;
    let lifted = lift.abs() > 0.5 && cross_extent(strip, orientation) > 1;

    let (x, y) = match orientation {
        Orientation::Horizontal => {
            let y = strip.y + strip.height - 1;
            (strip.x + axis, if lifted { y - 1 } else { y })
        }
        Orientation::Vertical => {
            let x = strip.x + strip.width - 1;
            (if lifted { x - 1 } else { x }, strip.y + axis)
        }
    };

    if !strip.contains(ratatui::layout::Position::new(x, y)) {
        return;
    }
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(glyph).set_fg(color);
    }
}

fn cross_extent(strip: Rect, orientation: Orientation) -> u16 {
    match orientation {
        Orientation::Horizontal => strip.height,
        Orientation::Vertical => strip.width,
    }
}
