use gloo_timers::callback::Interval;
use yew::prelude::*;

/// Split a millisecond distance into days/hours/minutes/seconds,
/// clamping past kickoffs to zero.
#[must_use]
pub fn countdown_parts(remaining_ms: i64) -> (i64, i64, i64, i64) {
    if remaining_ms <= 0 {
        return (0, 0, 0, 0);
    }
    let total_seconds = remaining_ms / 1_000;
    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3_600;
    let minutes = (total_seconds % 3_600) / 60;
    let seconds = total_seconds % 60;
    (days, hours, minutes, seconds)
}

#[derive(Properties, PartialEq, Clone)]
pub struct CountdownProps {
    /// Kickoff as a unix millisecond timestamp.
    pub target_millis: i64,
}

/// Ticking kickoff countdown. The interval handle lives in the effect
/// cleanup, so teardown cancels it; past targets pin at zero.
#[function_component(Countdown)]
pub fn countdown(props: &CountdownProps) -> Html {
    let remaining = use_state(|| 0_i64);

    {
        let remaining = remaining.clone();
        use_effect_with(props.target_millis, move |&target| {
            let tick = move || {
                let now = js_sys::Date::now() as i64;
                remaining.set((target - now).max(0));
            };
            tick();
            let interval = Interval::new(1_000, tick);
            move || drop(interval)
        });
    }

    let (days, hours, minutes, seconds) = countdown_parts(*remaining);
    html! {
        <div class="countdown" role="timer">
            <span class="countdown__part">{ format!("{days}d") }</span>
            <span class="countdown__part">{ format!("{hours:02}h") }</span>
            <span class="countdown__part">{ format!("{minutes:02}m") }</span>
            <span class="countdown__part">{ format!("{seconds:02}s") }</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_split_a_known_distance() {
        // 2 days, 3 hours, 4 minutes, 5 seconds.
        let ms = ((2 * 86_400 + 3 * 3_600 + 4 * 60 + 5) * 1_000) as i64;
        assert_eq!(countdown_parts(ms), (2, 3, 4, 5));
    }

    #[test]
    fn past_kickoffs_clamp_to_zero() {
        assert_eq!(countdown_parts(-1), (0, 0, 0, 0));
        assert_eq!(countdown_parts(0), (0, 0, 0, 0));
    }
}
