//! In-memory platform backend
//!
//! Replays a scripted event queue, answers asset lookups from a fixed
//! dimension table, and records every submitted frame. When the script runs
//! dry it emits a window-quit event, so a headless run always terminates.
//! Used by the test suite and by the binary's demo mode.

use std::collections::VecDeque;

use crate::consts::{AVATAR_ASSET, COIN_ASSET, HAZARD_ASSET};
use crate::error::GameError;
use crate::frame::Frame;

use super::{Asset, InputEvent, Key, Platform};

#[derive(Debug, Default)]
pub struct HeadlessBackend {
    script: VecDeque<Vec<InputEvent>>,
    /// Every frame submitted by the loop, in order.
    pub frames: Vec<Frame>,
    /// Number of presented buffers.
    pub presented: usize,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend that replays `script`, one event batch per tick.
    pub fn scripted(script: Vec<Vec<InputEvent>>) -> Self {
        Self {
            script: script.into(),
            frames: Vec::new(),
            presented: 0,
        }
    }

    /// Convenience: a script that holds `key` for `ticks` ticks, then idles
    /// for `idle` more before the queue runs dry.
    pub fn hold_then_idle(key: Key, ticks: usize, idle: usize) -> Self {
        let mut script = vec![vec![InputEvent::KeyDown(key)]];
        script.extend(std::iter::repeat_with(Vec::new).take(ticks.saturating_sub(1)));
        script.push(vec![InputEvent::KeyUp(key)]);
        script.extend(std::iter::repeat_with(Vec::new).take(idle));
        Self::scripted(script)
    }
}

impl Platform for HeadlessBackend {
    fn load_asset(&mut self, name: &str) -> Result<Asset, GameError> {
        let (width, height) = match name {
            n if n == AVATAR_ASSET => (64, 64),
            n if n == COIN_ASSET => (40, 40),
            n if n == HAZARD_ASSET => (60, 60),
            _ => {
                return Err(GameError::AssetLoad {
                    name: name.to_owned(),
                    reason: "not in the headless asset table".to_owned(),
                });
            }
        };
        Ok(Asset {
            name: name.to_owned(),
            width,
            height,
        })
    }

    fn poll_events(&mut self) -> Result<Vec<InputEvent>, GameError> {
        Ok(self
            .script
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit]))
    }

    fn draw_frame(&mut self, frame: &Frame) -> Result<(), GameError> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn present(&mut self) -> Result<(), GameError> {
        self.presented += 1;
        Ok(())
    }

    fn wait_for_tick(&mut self, _hz: u32) {
        // No pacing headless
    }
}
