//! The control surface: bindings from controls to commands, shift state,
//! event classification and the scheduled follow-up work.
//!
//! Everything runs on the caller's loop. `handle_*` dispatches synchronously;
//! `tick` emits long presses and runs due tasks; `flush` refreshes feedback.

mod classifier;

pub use classifier::ButtonClassifier;

use std::collections::HashMap;

use gridlink_types::{ButtonEvent, ButtonId, ColorId, ColorState, Direction, ModeId, ViewId};

use crate::color::ColorManager;
use crate::command::{
    Command, CommandContext, CursorCommand, ModeButtonCommand, ParameterPageNavigator,
    TrackNavigator, ViewMultiSelectCommand,
};
use crate::config::{Config, CursorTarget, Timing};
use crate::interaction_log::{InteractionLog, LoggedButton};
use crate::midi::MidiEvent;
use crate::mode::ModeManager;
use crate::model::Model;
use crate::schedule::{ScheduledTask, Scheduler};
use crate::view::ViewManager;

/// Hardware side of a surface: button LEDs and a text display.
pub trait Surface {
    /// Set the LED of `button` to `color`.
    fn update_button(&mut self, button: ButtonId, color: ColorId);

    /// The fixed button of a cursor arrow.
    fn arrow_button(&self, direction: Direction) -> ButtonId;

    fn show_notification(&mut self, message: &str) {
        log::info!(target: "surface", "{}", message);
    }
}

pub struct ControlSurface<S: Surface, M: Model> {
    surface: S,
    model: M,
    views: ViewManager,
    modes: ModeManager,
    colors: ColorManager,
    scheduler: Scheduler,
    classifier: ButtonClassifier,
    bindings: HashMap<ButtonId, Box<dyn Command>>,
    shift_button: Option<ButtonId>,
    shift_pressed: bool,
    channel: u8,
    timing: Timing,
    notifications: Vec<String>,
    log: Option<InteractionLog>,
}

impl<S: Surface, M: Model> ControlSurface<S, M> {
    pub fn new(
        surface: S,
        model: M,
        views: ViewManager,
        colors: ColorManager,
        timing: Timing,
        channel: u8,
    ) -> Self {
        Self {
            surface,
            model,
            views,
            modes: ModeManager::new(),
            colors,
            scheduler: Scheduler::new(),
            classifier: ButtonClassifier::new(timing.long_press_ms),
            bindings: HashMap::new(),
            shift_button: None,
            shift_pressed: false,
            channel,
            timing,
            notifications: Vec::new(),
            log: None,
        }
    }

    /// Build a surface with the standard bindings described by `config`:
    /// the four cursor arrows, shift, the view select button and one button
    /// per configured mode.
    pub fn from_config(config: &Config, surface: S, model: M) -> Self {
        let (on, off) = config.button_colors();
        let mut control = Self::new(
            surface,
            model,
            ViewManager::new(config.views()),
            ColorManager::with_button_colors(on, off),
            config.timing(),
            config.channel(),
        );

        let buttons = config.buttons();
        let arrows = [
            (buttons.left, Direction::Left),
            (buttons.right, Direction::Right),
            (buttons.up, Direction::Up),
            (buttons.down, Direction::Down),
        ];
        for (button, direction) in arrows {
            let command: Box<dyn Command> = match config.cursor_target() {
                CursorTarget::Tracks => Box::new(CursorCommand::new(direction, TrackNavigator)),
                CursorTarget::Parameters => {
                    Box::new(CursorCommand::new(direction, ParameterPageNavigator))
                }
            };
            control.bind(button, command);
        }
        control.set_shift_button(buttons.shift);
        control.bind(
            buttons.view_select,
            Box::new(ViewMultiSelectCommand::new(config.view_cycle())),
        );
        for mode in config.modes() {
            control.bind(mode.button, Box::new(ModeButtonCommand::new(mode.mode, mode.name)));
        }
        if let Some(initial) = config.initial_view() {
            control.views.set_active_view(initial);
        }
        control
    }

    /// Bind `command` to `button`, replacing any previous binding.
    pub fn bind(&mut self, button: ButtonId, command: Box<dyn Command>) {
        if self.bindings.insert(button, command).is_some() {
            log::debug!(target: "surface", "rebinding button {}", button);
        }
    }

    pub fn unbind(&mut self, button: ButtonId) -> bool {
        self.bindings.remove(&button).is_some()
    }

    pub fn is_bound(&self, button: ButtonId) -> bool {
        self.bindings.contains_key(&button)
    }

    pub fn set_shift_button(&mut self, button: ButtonId) {
        self.shift_button = Some(button);
    }

    pub fn is_shift_pressed(&self) -> bool {
        self.shift_pressed
    }

    pub fn set_interaction_log(&mut self, log: Option<InteractionLog>) {
        self.log = log;
    }

    pub fn set_active_view(&mut self, view: ViewId) -> bool {
        self.views.set_active_view(view)
    }

    /// Handle a parsed MIDI message. Messages on other channels are ignored.
    pub fn handle_midi(&mut self, event: &MidiEvent, now_ms: u64) {
        let (channel, number, value) = event.button_signal();
        if channel != self.channel {
            log::trace!(target: "surface", "ignoring message on channel {}", channel);
            return;
        }
        self.handle_button(ButtonId::new(number), value, now_ms);
    }

    /// Handle a raw button value at logical time `now_ms`.
    pub fn handle_button(&mut self, button: ButtonId, value: u8, now_ms: u64) {
        self.scheduler.advance_to(now_ms);
        if let Some(event) = self.classifier.classify(button, value, now_ms) {
            self.dispatch_event(button, event);
        }
    }

    /// Deliver an already classified event to the command bound to `button`.
    pub fn dispatch_event(&mut self, button: ButtonId, event: ButtonEvent) {
        log::trace!(target: "surface", "button {} {}", button, event.name());
        let view_before = self.views.active_view_id();
        let mode_before = self.modes.active_mode_id();
        let is_shift = Some(button) == self.shift_button;
        if is_shift || self.bindings.contains_key(&button) {
            let now = self.scheduler.now_ms();
            if let Some(log) = self.log.as_mut() {
                log.log_button(now, button, event, view_before, mode_before);
            }
        }

        if is_shift {
            match event {
                ButtonEvent::Down => self.shift_pressed = true,
                ButtonEvent::Up => self.shift_pressed = false,
                ButtonEvent::Long => {}
            }
        }

        let Some(command) = self.bindings.get_mut(&button) else {
            if !is_shift {
                log::trace!(target: "surface", "no command bound to button {}", button);
            }
            return;
        };

        let mut ctx = CommandContext::new(
            &mut self.model,
            &mut self.views,
            &mut self.modes,
            &mut self.scheduler,
            &mut self.notifications,
            self.shift_pressed,
            self.timing,
        );
        command.execute(event, &mut ctx);

        self.log_changes(view_before, mode_before);
        self.drain_notifications();
    }

    /// Advance the clock: report long presses, then run every due task.
    pub fn tick(&mut self, now_ms: u64) {
        self.scheduler.advance_to(now_ms);
        for button in self.classifier.poll_long(now_ms) {
            self.dispatch_event(button, ButtonEvent::Long);
        }
        self.run_due(now_ms);
    }

    /// Re-dispatch logged button events at their logged times, then run the
    /// work they left scheduled.
    pub fn replay(&mut self, events: &[LoggedButton]) {
        for logged in events {
            self.run_due(logged.t_ms);
            self.dispatch_event(logged.button, logged.event);
        }
        while let Some(due) = self.scheduler.next_due_ms() {
            self.run_due(due);
        }
    }

    fn run_due(&mut self, now_ms: u64) {
        self.scheduler.advance_to(now_ms);
        for task in self.scheduler.drain_due() {
            self.run_task(task);
        }
    }

    /// Refresh the arrow feedback. One cursor command repaints all four
    /// arrows, so only the one on the down arrow is asked.
    pub fn flush(&mut self) {
        let button = self.surface.arrow_button(Direction::Down);
        let Some(command) = self.bindings.get_mut(&button) else {
            return;
        };
        let mut ctx = CommandContext::new(
            &mut self.model,
            &mut self.views,
            &mut self.modes,
            &mut self.scheduler,
            &mut self.notifications,
            self.shift_pressed,
            self.timing,
        );
        command.update_feedback(&mut ctx);
        self.drain_notifications();
    }

    fn run_task(&mut self, task: ScheduledTask) {
        match task {
            ScheduledTask::SelectTrack(index) => {
                self.model.current_track_bank_mut().select_track(index);
            }
            ScheduledTask::RepaintArrows(state) => {
                let on = self.colors.color(ColorState::ButtonOn);
                let off = self.colors.color(ColorState::ButtonOff);
                for direction in Direction::ALL {
                    let button = self.surface.arrow_button(direction);
                    let color = if state.can_scroll(direction) { on } else { off };
                    self.surface.update_button(button, color);
                }
            }
        }
    }

    fn log_changes(&mut self, view_before: Option<ViewId>, mode_before: Option<ModeId>) {
        let view = self.views.active_view_id();
        let mode = self.modes.active_mode_id();
        let now = self.scheduler.now_ms();
        let Some(log) = self.log.as_mut() else {
            return;
        };
        if view != view_before {
            let name = view.and_then(|v| self.views.view_name(v)).unwrap_or("");
            log.log_view_change(now, view, name);
        }
        if mode != mode_before {
            log.log_mode_change(now, mode);
        }
    }

    fn drain_notifications(&mut self) {
        for message in self.notifications.drain(..) {
            self.surface.show_notification(&message);
        }
    }

    /// Subscribe to (or drop) the model's observed properties.
    pub fn enable_observers(&mut self, enable: bool) {
        self.model.enable_observers(enable);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    pub fn views(&self) -> &ViewManager {
        &self.views
    }

    pub fn modes(&self) -> &ModeManager {
        &self.modes
    }

    pub fn colors(&self) -> &ColorManager {
        &self.colors
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }
}
