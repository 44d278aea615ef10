//! Status bar widget: one line with the current route and booking endpoint.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    /// Route of the active screen, e.g. `/confirmation`.
    pub route: String,
    /// Endpoint bookings are posted to.
    pub endpoint: String,
}

/// Renders `<route>  <endpoint>`, route in Cyan and endpoint in DarkGray.
///
/// Renders nothing if `ctx.route` is empty.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    if ctx.route.is_empty() {
        return;
    }

    let spans = vec![
        Span::styled(ctx.route.clone(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(ctx.endpoint.clone(), Style::default().fg(Color::DarkGray)),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_status_bar(ctx: &StatusBarContext, width: u16) -> String {
        let backend = TestBackend::new(width, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                draw_status_bar(ctx, frame, frame.area());
            })
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn renders_route_and_endpoint() {
        let ctx = StatusBarContext {
            route: "/confirmation".into(),
            endpoint: "http://localhost/booking".into(),
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.contains("/confirmation"), "should show route");
        assert!(
            output.contains("http://localhost/booking"),
            "should show endpoint"
        );
    }

    #[test]
    fn renders_nothing_without_route() {
        let ctx = StatusBarContext {
            route: String::new(),
            endpoint: "http://localhost/booking".into(),
        };
        let output = render_status_bar(&ctx, 60);
        assert!(output.trim().is_empty(), "blank context should render blank");
    }
}
