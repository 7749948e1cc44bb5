use crate::dom;
use fnv::FnvHashMap;
use smallvec::SmallVec;
use sphere_core::{hooks, intro_steps, AnimationTarget, IntroTargets, Scene, Timeline};
use web_sys as web;

type Elements = SmallVec<[web::HtmlElement; 4]>;

/// Entrance timeline bound to the page elements it animates.
pub struct IntroAnimation {
    timeline: Timeline,
    elements: FnvHashMap<String, Elements>,
}

impl IntroAnimation {
    /// Resolves the animated elements under `root` once. Steps whose class
    /// matches nothing are skipped with a warning.
    pub fn new(root: &web::Element) -> Self {
        let mut elements = FnvHashMap::default();
        for class in [hooks::NAV, hooks::LIST_ITEM, hooks::TITLE] {
            let found: Elements = dom::elements_by_class(root, class).into_iter().collect();
            elements.insert(class.to_string(), found);
        }
        let count = |class: &str| elements.get(class).map_or(0, |v: &Elements| v.len());
        let targets = IntroTargets {
            nav: count(hooks::NAV),
            list_items: count(hooks::LIST_ITEM),
            title: count(hooks::TITLE),
        };

        let mut timeline = Timeline::new();
        for step in intro_steps(targets) {
            if let Err(e) = timeline.push(step) {
                log::warn!("[intro] skipping step: {}", e);
            }
        }
        log::debug!("[intro] {:?} duration={:.2}s", targets, timeline.duration());
        Self { timeline, elements }
    }

    /// Applies the poses for `dt` seconds of progress. `advance(0.0)` renders
    /// every target in its starting state.
    pub fn advance(&mut self, dt: f32, scene: &mut Scene) {
        for sample in self.timeline.advance(dt) {
            match sample.target {
                AnimationTarget::SphereScale => scene.apply_sphere_pose(&sample.pose),
                AnimationTarget::Class(class) => {
                    if let Some(el) = self.elements.get(class).and_then(|v| v.get(sample.index)) {
                        dom::apply_pose(el, &sample.pose);
                    }
                }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.timeline.is_complete()
    }

    /// Cancels the remaining animation. Element styles stay where they are.
    pub fn clear(&mut self) {
        self.timeline.clear();
    }
}
