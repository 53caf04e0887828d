//! Command dispatcher: reads settings from the injected store, runs the step
//! or reset policy, and writes the result back.

use futures::future::join_all;
use log::{debug, info, warn};
use serde_json::Value;

use crate::commands::{Action, Command};
use crate::constants::LINE_HEIGHT_RATIO;
use crate::error::{Error, Result};
use crate::notify::Notifier;
use crate::reset::{resolve_reset, ResetOutcome};
use crate::settings::{read_number, read_optional, ShortcutsSettings};
use crate::step::{compute_step, Direction, StepChange};
use crate::store::{ConfigurationService, ConfigurationTarget};
use crate::surface::Surface;

/// Result of a step on one surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepReport {
    /// The computed size equals the current one; nothing was written
    Unchanged,
    Changed(StepChange),
}

/// Result of a reset on one surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReport {
    /// The override was removed, or removal failed and was ignored
    Cleared,
    Applied(i64),
    /// The configured default was invalid and the user was notified
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceReport {
    Step(StepReport),
    Reset(ResetReport),
}

/// Font size command handler bound to a settings store and a notifier
pub struct FontShortcuts<S, N> {
    store: S,
    notifier: N,
}

impl<S: ConfigurationService, N: Notifier> FontShortcuts<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self { store, notifier }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Identifiers of every command this handler answers to
    pub fn commands(&self) -> impl Iterator<Item = &'static str> {
        Command::ALL.into_iter().map(Command::id)
    }

    /// Run a command by its identifier
    pub async fn execute_id(&self, id: &str) -> Result<Vec<(Surface, SurfaceReport)>> {
        let command: Command = id.parse()?;
        self.execute(command).await
    }

    /// Run a command on each of its surfaces concurrently.
    ///
    /// Every surface runs to completion even when another fails; failures are
    /// collected and returned together.
    pub async fn execute(&self, command: Command) -> Result<Vec<(Surface, SurfaceReport)>> {
        let plan = command.plan();
        info!("Running {}", plan.id);

        let runs = plan.surfaces.iter().map(|&surface| async move {
            let report = match plan.action {
                Action::Step(direction) => self
                    .step_font_size(surface, direction)
                    .await
                    .map(SurfaceReport::Step),
                Action::Reset => self.reset_font_size(surface).await.map(SurfaceReport::Reset),
            };
            (surface, report)
        });

        let mut reports = Vec::with_capacity(plan.surfaces.len());
        let mut errors = Vec::new();
        for (surface, result) in join_all(runs).await {
            match result {
                Ok(report) => reports.push((surface, report)),
                Err(e) => {
                    warn!("{} failed for {}: {}", plan.id, surface, e);
                    errors.push(e);
                }
            }
        }

        Error::aggregate(errors)?;
        Ok(reports)
    }

    /// Move one surface's font size by the configured step.
    ///
    /// Font size and line height are dispatched together and both are awaited,
    /// so a failure of one write does not cancel the other.
    pub async fn step_font_size(
        &self,
        surface: Surface,
        direction: Direction,
    ) -> Result<StepReport> {
        let keys = surface.keys();
        let current = read_number(&self.store, keys.font_size)?;
        let settings = ShortcutsSettings::read(&self.store)?;

        let Some(change) = compute_step(
            current,
            settings.step,
            direction,
            settings.line_height_ratio,
        ) else {
            debug!("{} font size stays at {}", surface, current);
            return Ok(StepReport::Unchanged);
        };

        // a ratio large enough to overflow would persist as null
        if !change.line_height.is_finite() {
            return Err(Error::InvalidSetting {
                key: LINE_HEIGHT_RATIO.to_string(),
                value: Value::from(settings.line_height_ratio),
            });
        }

        info!(
            "Setting {} font size {} -> {} (line height {})",
            surface, current, change.font_size, change.line_height
        );

        let (font_size, line_height) = futures::join!(
            self.persist(keys.font_size, Some(Value::from(change.font_size))),
            self.persist(keys.line_height, Some(Value::from(change.line_height))),
        );
        Error::aggregate(
            [font_size.err(), line_height.err()]
                .into_iter()
                .flatten()
                .collect(),
        )?;

        Ok(StepReport::Changed(change))
    }

    /// Reset one surface's font size from its configured default
    pub async fn reset_font_size(&self, surface: Surface) -> Result<ResetReport> {
        let keys = surface.keys();
        let default = read_optional(&self.store, keys.default_font_size);

        match resolve_reset(surface, default.as_ref()) {
            ResetOutcome::ClearOverride => {
                // best effort: a failed removal leaves the override in place
                if let Err(e) = self
                    .store
                    .update(keys.font_size, None, ConfigurationTarget::Global)
                    .await
                {
                    debug!("Ignoring failure to clear {}: {}", keys.font_size, e);
                } else {
                    info!("Cleared {} override", keys.font_size);
                }
                Ok(ResetReport::Cleared)
            }
            ResetOutcome::ApplyDefault(size) => {
                self.persist(keys.font_size, Some(Value::from(size))).await?;
                info!("Reset {} to {}", keys.font_size, size);
                Ok(ResetReport::Applied(size))
            }
            ResetOutcome::RejectInvalid(message) => {
                warn!("Rejected {} reset: invalid {}", surface, keys.default_font_size);
                self.notifier.show_error(&message);
                Ok(ResetReport::Rejected)
            }
        }
    }

    async fn persist(&self, key: &str, value: Option<Value>) -> Result<()> {
        self.store
            .update(key, value, ConfigurationTarget::Global)
            .await
            .map_err(|source| Error::Persistence {
                key: key.to_string(),
                source,
            })
    }
}
