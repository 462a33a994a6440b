/// Translation of terminal events into scene input
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use view3d_core::{Raster, Scene};

use crate::display::Viewport;

/// What the event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Redraw,
    Resize(u16, u16),
    Quit,
}

/// Apply `event` to the scene. Mouse positions are mapped through
/// `viewport` into the pixel space of `raster`.
pub fn handle_event(scene: &mut Scene, viewport: &Viewport, raster: &Raster, event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key(scene, key),
        Event::Mouse(mouse) => handle_mouse(scene, viewport, raster, mouse),
        Event::Resize(cols, rows) => Action::Resize(cols, rows),
        _ => Action::None,
    }
}

fn handle_key(scene: &mut Scene, key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('+') | KeyCode::Char('=') => redraw_if(scene.wheel(1)),
        KeyCode::Char('-') => redraw_if(scene.wheel(-1)),
        _ => Action::None,
    }
}

fn handle_mouse(scene: &mut Scene, viewport: &Viewport, raster: &Raster, mouse: MouseEvent) -> Action {
    let pos = viewport.cell_to_pixel(mouse.column, mouse.row, raster);

    match mouse.kind {
        MouseEventKind::Down(_) => {
            scene.press(pos);
            Action::None
        }
        MouseEventKind::Drag(button) => {
            let roll = button == MouseButton::Middle || mouse.modifiers.contains(KeyModifiers::CONTROL);
            redraw_if(scene.drag_to(pos, roll))
        }
        MouseEventKind::Up(_) => {
            scene.release();
            Action::None
        }
        MouseEventKind::ScrollUp => redraw_if(scene.wheel(1)),
        MouseEventKind::ScrollDown => redraw_if(scene.wheel(-1)),
        _ => Action::None,
    }
}

fn redraw_if(changed: bool) -> Action {
    if changed {
        Action::Redraw
    } else {
        Action::None
    }
}
