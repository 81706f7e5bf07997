use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Flex, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_dispatch::{DataResource, EventKind};
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{Component, NodeView, NodeViewProps};
use crate::action::Action;
use crate::forecast::ForecastData;
use crate::screen::{compose_screen, compose_screen_with_week};
use crate::state::AppState;
use crate::view::VisualNode;

pub const ERROR_ICON: &str = "\u{26a0}\u{fe0f}";

/// Props for ForecastScreen - read-only view of state
pub struct ForecastScreenProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole screen: composed forecast tree, notice line and help bar
#[derive(Default)]
pub struct ForecastScreen;

impl Component<Action> for ForecastScreen {
    type Props<'a> = ForecastScreenProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Some(Action::HourlyScrollLeft),
                KeyCode::Right | KeyCode::Char('l') => Some(Action::HourlyScrollRight),
                KeyCode::Home | KeyCode::Char('g') => Some(Action::HourlyScrollHome),
                KeyCode::Char('r') | KeyCode::F(5) => Some(Action::ForecastReload),
                KeyCode::Char('u') => Some(Action::UiToggleUnits),
                KeyCode::Char('w') => Some(Action::UiToggleWeek),
                KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: ForecastScreenProps<'_>) {
        let state = props.state;
        let notice = notice_line(state);
        let chunks = Layout::vertical([
            Constraint::Min(1),                              // Forecast
            Constraint::Length(u16::from(notice.is_some())), // Reload notice
            Constraint::Length(1),                           // Help bar
        ])
        .split(area);

        match &state.forecast {
            DataResource::Loaded(data) => {
                let tree = screen_tree(state, data);
                let mut view = NodeView;
                view.render(
                    frame,
                    chunks[0],
                    NodeViewProps {
                        node: &tree,
                        scroll_offset: state.hourly_offset,
                    },
                );
            }
            DataResource::Loading => render_message(frame, chunks[0], "Loading forecast..."),
            DataResource::Failed(error) => render_error(frame, chunks[0], error),
            DataResource::Empty => render_hint(frame, chunks[0]),
        }

        if let Some(notice) = notice {
            frame.render_widget(Paragraph::new(notice), chunks[1]);
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("←/→", "scroll"),
                    StatusBarHint::new("w", "week"),
                    StatusBarHint::new("u", "units"),
                    StatusBarHint::new("r", "reload"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

/// Compose the visual tree for the current view settings.
pub fn screen_tree(state: &AppState, data: &ForecastData) -> VisualNode {
    if state.show_week {
        compose_screen_with_week(&data.current, &data.hourly, &data.daily, state.unit)
    } else {
        compose_screen(&data.current, &data.hourly, state.unit)
    }
}

fn notice_line(state: &AppState) -> Option<Line<'static>> {
    if state.is_reloading {
        return Some(
            Line::from(Span::styled(
                "Reloading forecast...",
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        );
    }
    state.reload_error.as_ref().map(|error| {
        Line::from(vec![
            Span::styled("Reload failed: ", Style::default().fg(Color::Red).bold()),
            Span::styled(error.clone(), Style::default().fg(Color::Rgb(200, 100, 100))),
        ])
        .centered()
    })
}

fn render_message(frame: &mut Frame, area: Rect, message: &str) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let msg = Line::from(vec![Span::styled(
        message.to_string(),
        Style::default().fg(Color::DarkGray),
    )])
    .centered();
    frame.render_widget(Paragraph::new(msg), line);
}

fn render_hint(frame: &mut Frame, area: Rect) {
    let [line] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let hint = Line::from(vec![
        Span::styled("Press ", Style::default().fg(Color::DarkGray)),
        Span::styled("r", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to load the forecast", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), line);
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to retry", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[5],
    );
}
