//! Drawing surfaces: the only place chart output mutates anything.

use super::config::ChartLayout;
use super::render::{ChartDrawing, DrawCommand};

/// A target that can replay draw commands. Implementors own their contents
/// exclusively; `paint` always clears before drawing, so repeated renders of
/// the same drawing leave the surface in the same state.
pub trait DrawingSurface {
    fn clear(&mut self);

    /// Called once per paint, after `clear`, before any command.
    fn begin(&mut self, _layout: &ChartLayout) {}

    fn draw(&mut self, command: &DrawCommand);
}

pub fn paint<S: DrawingSurface + ?Sized>(surface: &mut S, drawing: &ChartDrawing) {
    surface.clear();
    surface.begin(&drawing.layout);
    for command in &drawing.commands {
        surface.draw(command);
    }
}

/// Surface that simply keeps the commands it was given.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl DrawingSurface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.commands.push(command.clone());
    }
}
