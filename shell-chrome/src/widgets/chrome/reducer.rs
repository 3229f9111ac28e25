use super::command::ChromeCommand;
use super::event::ChromeEffect;
use super::state::ChromeState;

/// Reduce a chrome command into state mutation and the effect to run, if any.
pub(super) fn reduce(
    state: &mut ChromeState,
    command: ChromeCommand,
) -> Option<ChromeEffect> {
    match command {
        ChromeCommand::TogglePanel => {
            let open = state.toggle_panel();
            log::debug!(
                "navbar {} (sm width {})",
                if open { "opened" } else { "closed" },
                state.panel_width().sm
            );
            None
        },
        ChromeCommand::RequestMinimize => Some(ChromeEffect::Minimize),
        ChromeCommand::RequestToggleMaximize => {
            Some(ChromeEffect::ToggleMaximize)
        },
        ChromeCommand::RequestClose => Some(ChromeEffect::Close),
        ChromeCommand::StartWindowDrag => Some(ChromeEffect::StartDrag),
        ChromeCommand::ResizeNotified => {
            let ticket = state.issue_query();
            Some(ChromeEffect::QueryMaximized { ticket })
        },
        ChromeCommand::ToggleMaximizeSettled(Ok(())) => {
            let ticket = state.issue_query();
            Some(ChromeEffect::QueryMaximized { ticket })
        },
        ChromeCommand::ToggleMaximizeSettled(Err(err)) => {
            log::warn!("toggle maximize failed: {err}");
            None
        },
        ChromeCommand::MaximizedObserved {
            ticket,
            result: Ok(maximized),
        } => {
            if state.observe_maximized(ticket, maximized) {
                log::debug!("window maximized = {maximized} ({ticket:?})");
            } else {
                log::debug!("dropped stale maximized response {ticket:?}");
            }
            None
        },
        ChromeCommand::MaximizedObserved {
            ticket,
            result: Err(err),
        } => {
            log::warn!(
                "maximized query {ticket:?} failed, keeping last known value: {err}"
            );
            None
        },
        ChromeCommand::RequestSettled { call, result } => {
            if let Err(err) = result {
                log::warn!("host call {call} failed: {err}");
            }
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, HostError};
    use crate::widgets::chrome::model::{PanelSizing, QueryTicket};

    fn state() -> ChromeState {
        ChromeState::new(PanelSizing::default())
    }

    fn query_ticket(effect: Option<ChromeEffect>) -> QueryTicket {
        match effect {
            Some(ChromeEffect::QueryMaximized { ticket }) => ticket,
            other => panic!("expected maximized query, got {other:?}"),
        }
    }

    fn unavailable(call: HostCall) -> HostError {
        HostError::WindowUnavailable { call }
    }

    #[test]
    fn given_mounted_state_when_created_then_panel_is_open_and_wide() {
        let state = state();

        assert!(state.panel_open());
        assert_eq!(state.panel_width().sm, 200.0);
        assert_eq!(state.panel_width().lg, 300.0);
        assert!(!state.maximized());
    }

    #[test]
    fn given_open_panel_when_toggled_twice_then_widths_follow_panel_state() {
        let mut state = state();

        let effect = reduce(&mut state, ChromeCommand::TogglePanel);
        assert_eq!(effect, None);
        assert!(!state.panel_open());
        assert_eq!(state.panel_width().sm, 100.0);

        let _ = reduce(&mut state, ChromeCommand::TogglePanel);
        assert!(state.panel_open());
        assert_eq!(state.panel_width().sm, 200.0);
    }

    #[test]
    fn given_any_number_of_toggles_then_open_flag_tracks_parity_and_lg_is_fixed()
    {
        let mut state = state();

        for n in 1..=9 {
            let _ = reduce(&mut state, ChromeCommand::TogglePanel);
            assert_eq!(state.panel_open(), n % 2 == 0);
            assert_eq!(state.panel_width().lg, 300.0);
        }
    }

    #[test]
    fn given_panel_toggle_when_reduced_then_maximized_cache_is_untouched() {
        let mut state = state();
        let ticket = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Ok(true),
            },
        );

        let _ = reduce(&mut state, ChromeCommand::TogglePanel);

        assert!(state.maximized());
    }

    #[test]
    fn given_toggle_maximize_request_when_reduced_then_host_toggle_is_issued_first()
     {
        let mut state = state();

        let effect = reduce(&mut state, ChromeCommand::RequestToggleMaximize);

        assert_eq!(effect, Some(ChromeEffect::ToggleMaximize));
        assert!(!state.maximized());
    }

    #[test]
    fn given_toggle_settled_when_query_resolves_then_cache_equals_observed_value()
    {
        let mut state = state();
        let _ = reduce(&mut state, ChromeCommand::RequestToggleMaximize);

        let ticket = query_ticket(reduce(
            &mut state,
            ChromeCommand::ToggleMaximizeSettled(Ok(())),
        ));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Ok(true),
            },
        );
        assert!(state.maximized());

        let _ = reduce(&mut state, ChromeCommand::RequestToggleMaximize);
        let ticket = query_ticket(reduce(
            &mut state,
            ChromeCommand::ToggleMaximizeSettled(Ok(())),
        ));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Ok(false),
            },
        );
        assert!(!state.maximized());
    }

    #[test]
    fn given_host_reports_same_state_after_toggle_then_cache_follows_host() {
        let mut state = state();

        let ticket = query_ticket(reduce(
            &mut state,
            ChromeCommand::ToggleMaximizeSettled(Ok(())),
        ));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Ok(false),
            },
        );

        assert!(!state.maximized());
    }

    #[test]
    fn given_failed_toggle_when_settled_then_no_query_is_issued() {
        let mut state = state();

        let effect = reduce(
            &mut state,
            ChromeCommand::ToggleMaximizeSettled(Err(unavailable(
                HostCall::ToggleMaximize,
            ))),
        );

        assert_eq!(effect, None);
        assert!(!state.maximized());
    }

    #[test]
    fn given_resize_when_query_fails_then_last_known_value_is_kept() {
        let mut state = state();
        let ticket = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Ok(true),
            },
        );

        let ticket = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Err(unavailable(HostCall::IsMaximized)),
            },
        );

        assert!(state.maximized());
    }

    #[test]
    fn given_failed_query_when_later_query_succeeds_then_it_is_applied() {
        let mut state = state();
        let failed = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket: failed,
                result: Err(unavailable(HostCall::IsMaximized)),
            },
        );

        let ticket = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Ok(true),
            },
        );

        assert!(state.maximized());
    }

    #[test]
    fn given_overlapping_queries_when_older_resolves_last_then_it_is_discarded()
    {
        let mut state = state();
        let older = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));
        let newer = query_ticket(reduce(
            &mut state,
            ChromeCommand::ToggleMaximizeSettled(Ok(())),
        ));
        assert!(older < newer);

        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket: newer,
                result: Ok(true),
            },
        );
        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket: older,
                result: Ok(false),
            },
        );

        assert!(state.maximized());
    }

    #[test]
    fn given_overlapping_queries_when_resolved_in_order_then_newest_wins() {
        let mut state = state();
        let older = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));
        let newer = query_ticket(reduce(&mut state, ChromeCommand::ResizeNotified));

        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket: older,
                result: Ok(true),
            },
        );
        assert!(state.maximized());

        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket: newer,
                result: Ok(false),
            },
        );
        assert!(!state.maximized());
    }

    #[test]
    fn given_minimize_during_pending_toggle_then_only_the_query_updates_cache() {
        let mut state = state();
        let _ = reduce(&mut state, ChromeCommand::RequestToggleMaximize);
        let ticket = query_ticket(reduce(
            &mut state,
            ChromeCommand::ToggleMaximizeSettled(Ok(())),
        ));

        let effect = reduce(&mut state, ChromeCommand::RequestMinimize);
        assert_eq!(effect, Some(ChromeEffect::Minimize));
        let _ = reduce(
            &mut state,
            ChromeCommand::RequestSettled {
                call: HostCall::Minimize,
                result: Ok(()),
            },
        );
        assert!(!state.maximized());

        let _ = reduce(
            &mut state,
            ChromeCommand::MaximizedObserved {
                ticket,
                result: Ok(true),
            },
        );
        assert!(state.maximized());
    }

    #[test]
    fn given_fire_and_forget_requests_when_reduced_then_state_is_unchanged() {
        let mut state = state();

        assert_eq!(
            reduce(&mut state, ChromeCommand::RequestClose),
            Some(ChromeEffect::Close)
        );
        assert_eq!(
            reduce(&mut state, ChromeCommand::StartWindowDrag),
            Some(ChromeEffect::StartDrag)
        );
        let effect = reduce(
            &mut state,
            ChromeCommand::RequestSettled {
                call: HostCall::Close,
                result: Err(unavailable(HostCall::Close)),
            },
        );

        assert_eq!(effect, None);
        assert!(state.panel_open());
        assert!(!state.maximized());
    }
}
