use std::collections::VecDeque;

use crate::{math::Vector3, object::Sphere};

/// The directional signals held down during one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Input {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,

    /// Turns up/down into back/forward along z.
    pub modifier: bool,
    pub exit: bool,
}

impl Input {
    pub fn exit() -> Self {
        Self {
            exit: true,
            ..Default::default()
        }
    }

    /// Parse one move-script character. `.` is an idle frame.
    pub fn from_char(c: char) -> Option<Self> {
        let mut input = Self::default();
        match c {
            'l' => input.left = true,
            'r' => input.right = true,
            'u' => input.up = true,
            'd' => input.down = true,
            'f' => {
                input.modifier = true;
                input.down = true;
            }
            'b' => {
                input.modifier = true;
                input.up = true;
            }
            'q' => input.exit = true,
            '.' => {}
            _ => return None,
        }
        Some(input)
    }

    /// The one-unit step this input asks for.
    pub fn movement(&self) -> Vector3 {
        let mut step = Vector3::default();
        if self.right {
            step.x += 1.;
        }
        if self.left {
            step.x -= 1.;
        }
        match (self.down, self.modifier) {
            (true, true) => step.z += 1.,
            (true, false) => step.y += 1.,
            _ => {}
        }
        match (self.up, self.modifier) {
            (true, true) => step.z -= 1.,
            (true, false) => step.y -= 1.,
            _ => {}
        }
        step
    }

    /// Move a sphere by this input. Only its center changes.
    pub fn apply(&self, sphere: &mut Sphere) {
        sphere.origin += self.movement();
    }
}

/// A host capability polled once per frame, before the scene moves.
pub trait InputSource {
    fn poll(&mut self) -> Input;
}

/// Replays a fixed list of inputs, then asks to exit, or idles forever once
/// `then_idle` is set.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    queue: VecDeque<Input>,
    then_idle: bool,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
            then_idle: false,
        }
    }

    /// Parse a move script such as `rrr..dd`. Whitespace is skipped.
    pub fn parse(script: &str) -> Option<Self> {
        script
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Input::from_char)
            .collect::<Option<Vec<_>>>()
            .map(Self::new)
    }

    /// `n` frames with no input held.
    pub fn idle(n: usize) -> Self {
        Self::new(std::iter::repeat(Input::default()).take(n))
    }

    /// Keep returning idle input after the script runs out, leaving the
    /// frame limit to the caller.
    pub fn then_idle(mut self) -> Self {
        self.then_idle = true;
        self
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Input {
        match self.queue.pop_front() {
            Some(input) => input,
            None if self.then_idle => Input::default(),
            None => Input::exit(),
        }
    }
}
