use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::Paragraph;

use crate::application::{CellVisual, Frame};

/// Map a cell classification to its terminal style. Colors live here and
/// nowhere else; the session only hands over classifications.
fn cell_style(visual: CellVisual) -> Style {
    match visual {
        CellVisual::Dead => Style::new(),
        CellVisual::Alive => Style::new().bg(Color::Rgb(0x00, 0xaa, 0x00)),
        CellVisual::SelectedAlive => {
            Style::new().bg(Color::Rgb(0x8c, 0xff, 0x00)).add_modifier(Modifier::BOLD)
        }
        CellVisual::SelectedDead => Style::new().bg(Color::Rgb(0xf6, 0xff, 0x00)),
    }
}

fn text_style() -> Style {
    Style::new().bg(Color::Rgb(0xaa, 0xaa, 0xaa)).fg(Color::Black)
}

/// Draw one frame into the full terminal area. Each logical cell becomes
/// `cell_width` background-colored columns; the last two lines carry the
/// help and status text.
pub fn draw(frame: &mut ratatui::Frame, view: &Frame) {
    let text = match view {
        Frame::Loading => Text::from("loading..."),
        Frame::Grid { cells, cell_width, help, status } => {
            let blank = " ".repeat(usize::from(*cell_width));
            let mut lines: Vec<Line> = cells
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|&visual| Span::styled(blank.clone(), cell_style(visual)))
                        .collect::<Vec<_>>()
                        .into()
                })
                .collect();
            lines.push(Line::from(Span::styled(help.clone(), text_style())));
            lines.push(Line::from(Span::styled(status.clone(), text_style())));
            Text::from(lines)
        }
    };
    frame.render_widget(Paragraph::new(text), frame.area());
}
