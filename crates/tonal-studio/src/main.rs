//! Headless host for the gradient slider.
//!
//! Wires an `InputState` to a `GradientSlider` through `UiScene`, replays a
//! scripted pointer session (hover, drag the highlights stop, drag the
//! shadows stop, leave) and logs every notification and repaint.
//!
//! Environment:
//! - `TONAL_MARKERS`: marker count, 2 or 3 (default 3)
//! - `TONAL_LOG`: log filter for this session, overriding `RUST_LOG` (default `info`)

use anyhow::{Context, Result};
use tonal_engine::input::{
    InputEvent,
    MouseButton,
    MouseButtonState,
    PointerButtonEvent,
    PointerMoveEvent,
};
use tonal_engine::logging::{init_logging, LoggingConfig};
use tonal_engine::scene::{DrawCmd, DrawList};
use tonal_ui::prelude::*;

/// Settings for one scripted session.
#[derive(Debug, Clone)]
struct SessionConfig {
    size: Vec2,
    markers: usize,
    max_color: Color,
    log_filter: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            size: Vec2::new(40.0, 256.0),
            markers: 3,
            max_color: Color::white(),
            log_filter: None,
        }
    }
}

impl SessionConfig {
    fn from_env() -> Result<Self> {
        Self::from_vars(std::env::var("TONAL_MARKERS").ok(), std::env::var("TONAL_LOG").ok())
    }

    fn from_vars(markers: Option<String>, log_filter: Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(raw) = markers {
            config.markers = raw
                .trim()
                .parse()
                .with_context(|| format!("TONAL_MARKERS is not a number: {raw:?}"))?;
        }
        config.log_filter = log_filter.filter(|f| !f.trim().is_empty());
        Ok(config)
    }
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMoved(PointerMoveEvent { x, y })
}

fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
    InputEvent::PointerButton(PointerButtonEvent { button: MouseButton::Left, state, x, y })
}

/// Pointer session: grab the top marker and pull it down to 200 then 180,
/// grab the bottom marker and push it up to 40, then leave.
fn script(slider: &GradientSlider, rect: Rect) -> Vec<InputEvent> {
    let x = rect.origin.x + rect.size.x * 0.5;
    let top = slider.count() - 1;
    let y = |v: u8| slider.value_to_y(v, rect);

    let mut events = vec![
        moved(x, y(128)),
        moved(x, y(slider.value(top))),
        button(MouseButtonState::Pressed, x, y(slider.value(top))),
    ];
    events.extend([230, 200, 180].map(|v| moved(x, y(v))));
    events.push(button(MouseButtonState::Released, x, y(180)));

    events.push(moved(x, y(slider.value(0))));
    events.push(button(MouseButtonState::Pressed, x, y(slider.value(0))));
    events.extend([10, 25, 40].map(|v| moved(x, y(v))));
    events.push(button(MouseButtonState::Released, x, y(40)));
    events.push(InputEvent::PointerLeft);
    events
}

fn describe(list: &DrawList) -> String {
    let (mut fills, mut triangles) = (0, 0);
    for cmd in list.items() {
        match cmd {
            DrawCmd::Rect(_) => fills += 1,
            DrawCmd::Polygon(_) => triangles += 1,
        }
    }
    format!("{fills} fill(s), {triangles} triangle(s)")
}

fn main() -> Result<()> {
    let config = SessionConfig::from_env()?;
    init_logging(LoggingConfig { env_filter: config.log_filter.clone(), ..LoggingConfig::default() });
    log::debug!("session config: {config:?}");

    let rect = Rect::new(0.0, 0.0, config.size.x, config.size.y);
    let mut slider = GradientSlider::new(config.markers)
        .context("cannot build gradient slider")?
        .with_max_color(config.max_color)
        .on_change(|index, value| log::info!("marker {index} -> {value}"));

    let mut input = InputState::new();
    let mut ui = UiScene::new();
    let list = ui.paint(&slider, rect, &UiInput::default());
    log::info!("initial paint: {}", describe(list));

    let mut redraws = 0usize;
    for ev in script(&slider, rect) {
        input.apply_event(&ev);
        let Some(event) = UiEvent::from_input(&input, &ev) else {
            continue;
        };
        if ui.dispatch(&mut slider, &event, rect) {
            redraws += 1;
            let list = ui.paint(&slider, rect, &UiInput::from_state(&input));
            log::debug!("repaint #{redraws} after {event:?}: {}", describe(list));
        }
    }

    println!("final markers: {:?} ({redraws} repaints)", slider.values());
    Ok(())
}
