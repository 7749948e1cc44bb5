use crate::config::hooks;
use crate::constants::{
    LIST_ITEM_OFFSET_Y_PCT, LIST_ITEM_SECS, LIST_ITEM_STAGGER_SECS, TIMELINE_STEP_SECS,
};
use crate::timeline::{AnimationStep, AnimationTarget, Pose};

/// Element counts the intro needs from the page, resolved by the caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntroTargets {
    pub nav: usize,
    pub list_items: usize,
    pub title: usize,
}

/// Entrance sequence: sphere grows in, then the nav fades in, then the list
/// items slide down one after another, then the title fades in.
pub fn intro_steps(targets: IntroTargets) -> Vec<AnimationStep> {
    vec![
        AnimationStep::new(
            AnimationTarget::SphereScale,
            Pose::scale(0.0),
            Pose::scale(1.0),
            TIMELINE_STEP_SECS,
        ),
        AnimationStep::new(
            AnimationTarget::class(hooks::NAV),
            Pose::opacity(0.0),
            Pose::opacity(1.0),
            TIMELINE_STEP_SECS,
        )
        .with_count(targets.nav),
        AnimationStep::new(
            AnimationTarget::class(hooks::LIST_ITEM),
            Pose::opacity(0.0).with_y_percent(LIST_ITEM_OFFSET_Y_PCT),
            Pose::opacity(1.0).with_y_percent(0.0),
            LIST_ITEM_SECS,
        )
        .with_stagger(LIST_ITEM_STAGGER_SECS)
        .with_count(targets.list_items),
        AnimationStep::new(
            AnimationTarget::class(hooks::TITLE),
            Pose::opacity(0.0),
            Pose::opacity(1.0),
            TIMELINE_STEP_SECS,
        )
        .with_count(targets.title),
    ]
}
