//! Intro overlay.
//!
//! Interactive mode reveals the profile text one block at a time, waits for
//! the visitor to press "Enter", then lets the shard grid fall away and
//! reassemble. Scripted mode shows a splash for a fixed delay. Either way the
//! driver decides when the overlay is done and calls `on_finish` once.

use dioxus::prelude::*;
use folio_intro::{intro_channel, IntroConfig, IntroHandle, IntroMode, IntroPhase, Shard, ShardGrid};

/// Duration of one shard's fall or rise transition.
const SHARD_TRANSITION_MS: u64 = 900;

/// The one animated property whose end counts as a shard settling.
const SETTLE_PROPERTY: &str = "transform";

#[component]
pub fn IntroOverlay(
    config: IntroConfig,
    name: String,
    headline: String,
    tagline: String,
    on_finish: EventHandler<()>,
) -> Element {
    let phase = use_signal(|| IntroPhase::START);

    // Grid and driver live exactly as long as this overlay. The spawned tasks
    // belong to this scope and are dropped with it, timers included.
    let (grid, handle) = use_hook(|| {
        // The scripted splash renders no shards.
        let grid = if config.is_interactive() {
            ShardGrid::from_config(&config)
        } else {
            ShardGrid::empty()
        };
        let (driver, handle) = intro_channel(&config, grid.len());
        tracing::debug!(
            shards = grid.len(),
            interactive = config.is_interactive(),
            "Intro overlay mounted"
        );

        spawn(async move {
            let outcome = driver.run(move || on_finish.call(())).await;
            tracing::debug!(?outcome, "Intro driver stopped");
        });

        let mut updates = handle.subscribe();
        spawn(async move {
            let mut phase = phase;
            while updates.changed().await.is_ok() {
                let next = *updates.borrow_and_update();
                phase.set(next);
            }
        });

        (grid, handle)
    });

    use_drop({
        let handle = handle.clone();
        move || handle.cancel()
    });

    if let IntroMode::ScriptedTimer { delay_ms } = config.mode {
        return rsx! {
            div {
                class: "intro-overlay intro-scripted",
                div {
                    class: "intro-text",
                    h1 { class: "intro-name is-shown", "{name}" }
                    p { class: "intro-headline is-shown", "{headline}" }
                    div {
                        class: "intro-progress",
                        div {
                            class: "intro-progress-bar",
                            style: "animation-duration: {delay_ms}ms;",
                        }
                    }
                }
            }
        };
    }

    let current = phase();
    let steps = config.reveal_steps();
    let revealed = current.revealed(steps);
    let awaiting_enter = current == IntroPhase::Idle { step: steps };
    let grid_style = format!(
        "grid-template-rows: repeat({}, 1fr); grid-template-columns: repeat({}, 1fr);",
        grid.rows(),
        grid.cols()
    );
    let enter_handle = handle.clone();

    rsx! {
        div {
            class: "intro-overlay intro-{current.css_value()}",

            div {
                class: "shard-grid",
                style: "{grid_style}",
                {grid.iter().map(|shard| {
                    let index = shard.index;
                    let handle = handle.clone();
                    rsx! {
                        div {
                            key: "{shard.id()}",
                            class: "shard",
                            style: shard_style(shard, current),
                            ontransitionend: move |evt: Event<TransitionData>| {
                                report_settled(&handle, index, current, &evt.data().property_name());
                            },
                        }
                    }
                })}
            }

            div {
                class: "intro-text",
                h1 { class: line_class("intro-name", 0, revealed, steps), "{name}" }
                p { class: line_class("intro-headline", 1, revealed, steps), "{headline}" }
                p { class: line_class("intro-tagline", 2, revealed, steps), "{tagline}" }

                if awaiting_enter {
                    button {
                        class: "intro-enter",
                        onclick: move |_| {
                            if let Err(err) = enter_handle.enter() {
                                tracing::warn!(%err, "Enter pressed after the intro stopped");
                            }
                        },
                        "Enter →"
                    }
                }
            }
        }
    }
}

/// Completion a finished shard transition stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShardReport {
    Fell,
    Rose,
}

/// Classify a transition end by the phase the shard was rendered in.
///
/// Shards animate `transform` and `opacity`; only `transform` reports, so a
/// late `opacity` end from the fall can never be counted as a rise.
fn settled_report(rendered: IntroPhase, property: &str) -> Option<ShardReport> {
    if property != SETTLE_PROPERTY {
        return None;
    }
    match rendered {
        IntroPhase::Falling => Some(ShardReport::Fell),
        IntroPhase::Rising => Some(ShardReport::Rose),
        IntroPhase::Idle { .. } | IntroPhase::Assembled => None,
    }
}

/// Forward a finished shard transition to the driver.
fn report_settled(handle: &IntroHandle, index: usize, rendered: IntroPhase, property: &str) {
    let sent = match settled_report(rendered, property) {
        Some(ShardReport::Fell) => handle.shard_fell(index),
        Some(ShardReport::Rose) => handle.shard_rose(index),
        None => return,
    };
    if let Err(err) = sent {
        tracing::trace!(index, %err, "Shard report dropped");
    }
}

/// Class list of text line `line`. Lines past the last reveal step show with it.
fn line_class(base: &str, line: u8, revealed: u8, steps: u8) -> String {
    let shown = line < revealed || revealed == steps;
    format!("{base} {}", if shown { "is-shown" } else { "is-pending" })
}

/// Inline transform and transition for one shard in `phase`.
fn shard_style(shard: &Shard, phase: IntroPhase) -> String {
    match phase {
        IntroPhase::Idle { .. } => String::new(),
        IntroPhase::Falling => format!(
            "transform: translateY(120vh) rotate({:.1}deg); opacity: 0; \
             transition: transform {SHARD_TRANSITION_MS}ms cubic-bezier(0.55, 0, 1, 0.45) {delay}ms, \
             opacity {SHARD_TRANSITION_MS}ms ease-in {delay}ms;",
            shard.rotation_deg,
            delay = shard.fall_delay.as_millis(),
        ),
        IntroPhase::Rising | IntroPhase::Assembled => format!(
            "transform: none; opacity: 1; \
             transition: transform {SHARD_TRANSITION_MS}ms cubic-bezier(0.16, 1, 0.3, 1) {delay}ms, \
             opacity {SHARD_TRANSITION_MS}ms ease-out {delay}ms;",
            delay = shard.rise_delay.as_millis(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use folio_intro::RunOutcome;
    use tokio::time::sleep;

    use super::*;

    fn shard() -> Shard {
        Shard {
            index: 5,
            row: 0,
            col: 5,
            fall_delay: Duration::from_millis(120),
            rise_delay: Duration::from_millis(340),
            rotation_deg: -12.5,
        }
    }

    #[test]
    fn test_idle_shard_has_no_transition() {
        assert!(shard_style(&shard(), IntroPhase::START).is_empty());
    }

    #[test]
    fn test_falling_uses_fall_delay() {
        let style = shard_style(&shard(), IntroPhase::Falling);
        assert!(style.contains("rotate(-12.5deg)"));
        assert!(style.contains("120ms"));
        assert!(!style.contains("340ms"));
    }

    #[test]
    fn test_rising_uses_rise_delay() {
        let style = shard_style(&shard(), IntroPhase::Rising);
        assert!(style.contains("transform: none"));
        assert!(style.contains("340ms"));
    }

    #[test]
    fn test_lines_follow_reveal_steps() {
        assert_eq!(line_class("intro-name", 0, 0, 3), "intro-name is-pending");
        assert_eq!(line_class("intro-name", 0, 1, 3), "intro-name is-shown");
        assert_eq!(line_class("intro-tagline", 2, 2, 3), "intro-tagline is-pending");
        assert_eq!(line_class("intro-tagline", 2, 3, 3), "intro-tagline is-shown");
    }

    #[test]
    fn test_lines_show_with_last_step() {
        // One reveal step shows every line at once.
        assert_eq!(line_class("intro-tagline", 2, 1, 1), "intro-tagline is-shown");
        // No reveal steps: text is visible from the start.
        assert_eq!(line_class("intro-name", 0, 0, 0), "intro-name is-shown");
    }

    #[test]
    fn test_only_transform_ends_report() {
        assert_eq!(
            settled_report(IntroPhase::Falling, "transform"),
            Some(ShardReport::Fell)
        );
        assert_eq!(
            settled_report(IntroPhase::Rising, "transform"),
            Some(ShardReport::Rose)
        );
        assert_eq!(settled_report(IntroPhase::Falling, "opacity"), None);
        assert_eq!(settled_report(IntroPhase::Rising, "opacity"), None);
    }

    #[test]
    fn test_no_report_outside_animation_phases() {
        assert_eq!(settled_report(IntroPhase::START, "transform"), None);
        assert_eq!(settled_report(IntroPhase::Assembled, "transform"), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_fall_event_never_counts_as_rise() {
        folio_logging::init_testing();
        let mut config = IntroConfig::interactive()
            .with_grid(1, 3)
            .with_watchdog(None);
        config.reveal_delays_ms.clear();

        let (driver, handle) = intro_channel(&config, 3);
        let finished = Arc::new(AtomicUsize::new(0));
        let task = tokio::spawn({
            let finished = finished.clone();
            driver.run(move || {
                finished.fetch_add(1, Ordering::SeqCst);
            })
        });

        let mut phases = handle.subscribe();
        handle.enter().unwrap();
        phases.wait_for(|p| *p == IntroPhase::Falling).await.unwrap();
        for index in 0..3 {
            report_settled(&handle, index, IntroPhase::Falling, "transform");
        }
        phases.wait_for(|p| *p == IntroPhase::Rising).await.unwrap();

        // Shard 2's opacity fall ends late, before and after the re-render.
        report_settled(&handle, 2, IntroPhase::Falling, "opacity");
        report_settled(&handle, 2, IntroPhase::Rising, "opacity");
        // Only shards 0 and 1 have really risen.
        report_settled(&handle, 0, IntroPhase::Rising, "transform");
        report_settled(&handle, 1, IntroPhase::Rising, "transform");

        sleep(Duration::from_secs(1)).await;
        assert_eq!(handle.phase(), IntroPhase::Rising);
        assert_eq!(finished.load(Ordering::SeqCst), 0);

        report_settled(&handle, 2, IntroPhase::Rising, "transform");
        phases.wait_for(|p| p.is_terminal()).await.unwrap();
        assert_eq!(task.await.unwrap(), RunOutcome::Finished);
        assert_eq!(finished.load(Ordering::SeqCst), 1);
    }
}
