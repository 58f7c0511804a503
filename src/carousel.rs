/// Rotating banner presentation for the home page.
///
/// Consumes a normalized banner list, drives timed advancement and manual
/// navigation, and tolerates the slide set changing underneath it while a
/// visitor keeps the page open.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::models::site_content::BannerSlide;

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Presentation state: `Idle` when no slide has a configured image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselState {
    Idle,
    Showing { index: usize },
}

struct CarouselInner {
    slides: Vec<BannerSlide>,
    state: CarouselState,
}

impl CarouselInner {
    fn new(slides: Vec<BannerSlide>) -> Self {
        let state = if slides.is_empty() {
            CarouselState::Idle
        } else {
            CarouselState::Showing { index: 0 }
        };
        CarouselInner { slides, state }
    }

    fn count(&self) -> usize {
        self.slides.len()
    }

    fn next(&mut self) {
        if let CarouselState::Showing { index } = self.state {
            self.state = CarouselState::Showing {
                index: (index + 1) % self.slides.len(),
            };
        }
    }

    fn previous(&mut self) {
        if let CarouselState::Showing { index } = self.state {
            let count = self.slides.len();
            self.state = CarouselState::Showing {
                index: (index + count - 1) % count,
            };
        }
    }

    fn go_to(&mut self, index: usize) -> bool {
        match self.state {
            CarouselState::Showing { .. } if index < self.slides.len() => {
                self.state = CarouselState::Showing { index };
                true
            }
            _ => false,
        }
    }

    fn replace_slides(&mut self, slides: Vec<BannerSlide>) {
        self.slides = slides;
        self.state = if self.slides.is_empty() {
            CarouselState::Idle
        } else {
            match self.state {
                CarouselState::Showing { index } if index < self.slides.len() => {
                    CarouselState::Showing { index }
                }
                // index fell off the end, or we were idle
                _ => CarouselState::Showing { index: 0 },
            }
        };
    }
}

pub struct CarouselEngine {
    inner: Arc<RwLock<CarouselInner>>,
    interval: Duration,
    autoplay_enabled: bool,
    autoplay: Option<JoinHandle<()>>,
}

impl CarouselEngine {
    /// Slides without a configured image never reach the engine; this filter
    /// is what separates a padded placeholder from a real slide.
    pub fn new(items: &[BannerSlide], interval: Duration) -> Self {
        let slides = filter_slides(items);
        CarouselEngine {
            inner: Arc::new(RwLock::new(CarouselInner::new(slides))),
            interval,
            autoplay_enabled: false,
            autoplay: None,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.inner.read().unwrap().state
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state() {
            CarouselState::Showing { index } => Some(index),
            CarouselState::Idle => None,
        }
    }

    pub fn current_slide(&self) -> Option<BannerSlide> {
        let inner = self.inner.read().unwrap();
        match inner.state {
            CarouselState::Showing { index } => inner.slides.get(index).cloned(),
            CarouselState::Idle => None,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.inner.read().unwrap().count()
    }

    pub fn next(&self) {
        self.inner.write().unwrap().next();
    }

    pub fn previous(&self) {
        self.inner.write().unwrap().previous();
    }

    /// Jumps to a slide; out-of-range targets are refused, not clamped.
    pub fn go_to(&self, index: usize) -> bool {
        self.inner.write().unwrap().go_to(index)
    }

    /// Starts timed advancement. Replaces any running timer, so one engine
    /// never drives two; with fewer than two slides autoplay stays inert.
    pub fn start_autoplay(&mut self) {
        self.autoplay_enabled = true;
        self.respawn();
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay_enabled = false;
        if let Some(handle) = self.autoplay.take() {
            handle.abort();
        }
    }

    /// Swaps the slide set, e.g. when an admin edit lands mid-session. An
    /// index past the new end resets to 0; the autoplay task is started or
    /// cancelled to match the new count.
    pub fn set_slides(&mut self, items: &[BannerSlide]) {
        let slides = filter_slides(items);
        self.inner.write().unwrap().replace_slides(slides);
        self.respawn();
    }

    fn respawn(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            handle.abort();
        }
        if !self.autoplay_enabled || self.slide_count() <= 1 {
            return;
        }

        let inner = Arc::clone(&self.inner);
        let period = self.interval;
        self.autoplay = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // the first tick of a tokio interval completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                inner.write().unwrap().next();
            }
        }));
    }
}

impl Drop for CarouselEngine {
    fn drop(&mut self) {
        if let Some(handle) = self.autoplay.take() {
            handle.abort();
        }
    }
}

fn filter_slides(items: &[BannerSlide]) -> Vec<BannerSlide> {
    items
        .iter()
        .filter(|s| !s.image_url.trim().is_empty())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(image_url: &str) -> BannerSlide {
        BannerSlide {
            image_url: image_url.to_string(),
            ..Default::default()
        }
    }

    fn slides(count: usize) -> Vec<BannerSlide> {
        (0..count).map(|i| slide(&format!("/banner-{i}.png"))).collect()
    }

    #[tokio::test]
    async fn empty_set_stays_idle_without_timer() {
        let mut engine = CarouselEngine::new(&[], DEFAULT_INTERVAL);
        assert_eq!(engine.state(), CarouselState::Idle);
        assert!(engine.current_slide().is_none());

        engine.start_autoplay();
        assert!(engine.autoplay.is_none());

        engine.next();
        engine.previous();
        assert_eq!(engine.state(), CarouselState::Idle);
    }

    #[tokio::test]
    async fn placeholder_slides_are_filtered_out() {
        let items = vec![slide("/real.png"), slide(""), slide("   ")];
        let engine = CarouselEngine::new(&items, DEFAULT_INTERVAL);
        assert_eq!(engine.slide_count(), 1);
        assert_eq!(engine.current_slide().unwrap().image_url, "/real.png");
    }

    #[tokio::test]
    async fn single_slide_is_inert() {
        let mut engine = CarouselEngine::new(&slides(1), DEFAULT_INTERVAL);

        engine.next();
        assert_eq!(engine.current_index(), Some(0));
        engine.previous();
        assert_eq!(engine.current_index(), Some(0));

        engine.start_autoplay();
        assert!(engine.autoplay.is_none());
    }

    #[tokio::test]
    async fn next_and_previous_wrap_around() {
        let engine = CarouselEngine::new(&slides(3), DEFAULT_INTERVAL);

        assert!(engine.go_to(2));
        engine.next();
        assert_eq!(engine.current_index(), Some(0));

        engine.previous();
        assert_eq!(engine.current_index(), Some(2));
    }

    #[tokio::test]
    async fn go_to_refuses_out_of_range() {
        let engine = CarouselEngine::new(&slides(3), DEFAULT_INTERVAL);

        assert!(!engine.go_to(3));
        assert_eq!(engine.current_index(), Some(0));
    }

    #[tokio::test]
    async fn shrinking_slide_set_resets_index() {
        let mut engine = CarouselEngine::new(&slides(3), DEFAULT_INTERVAL);
        assert!(engine.go_to(2));

        engine.set_slides(&slides(1));
        assert_eq!(engine.current_index(), Some(0));
        assert_eq!(engine.slide_count(), 1);
    }

    #[tokio::test]
    async fn shrinking_to_empty_goes_idle() {
        let mut engine = CarouselEngine::new(&slides(3), DEFAULT_INTERVAL);
        engine.set_slides(&[]);
        assert_eq!(engine.state(), CarouselState::Idle);
    }

    #[tokio::test]
    async fn growing_from_idle_starts_showing() {
        let mut engine = CarouselEngine::new(&[], DEFAULT_INTERVAL);
        engine.set_slides(&slides(2));
        assert_eq!(engine.current_index(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_advances_on_the_interval() {
        let mut engine = CarouselEngine::new(&slides(3), Duration::from_secs(5));
        engine.start_autoplay();

        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(engine.current_index(), Some(1));

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(engine.current_index(), Some(2));

        // wraps around like a manual next()
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(engine.current_index(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn restarting_autoplay_does_not_stack_timers() {
        let mut engine = CarouselEngine::new(&slides(3), Duration::from_secs(5));
        engine.start_autoplay();
        engine.start_autoplay();

        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(engine.current_index(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn stop_autoplay_cancels_the_timer() {
        let mut engine = CarouselEngine::new(&slides(3), Duration::from_secs(5));
        engine.start_autoplay();
        engine.stop_autoplay();

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(engine.current_index(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn no_tick_fires_after_drop() {
        let mut engine = CarouselEngine::new(&slides(3), Duration::from_secs(5));
        engine.start_autoplay();

        let inner = Arc::clone(&engine.inner);
        drop(engine);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(
            inner.read().unwrap().state,
            CarouselState::Showing { index: 0 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_stops_when_set_shrinks_to_one() {
        let mut engine = CarouselEngine::new(&slides(3), Duration::from_secs(5));
        engine.start_autoplay();

        engine.set_slides(&slides(1));
        assert!(engine.autoplay.is_none());

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert_eq!(engine.current_index(), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn autoplay_resumes_when_set_grows_again() {
        let mut engine = CarouselEngine::new(&slides(1), Duration::from_secs(5));
        engine.start_autoplay();
        assert!(engine.autoplay.is_none());

        engine.set_slides(&slides(2));
        assert!(engine.autoplay.is_some());

        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(engine.current_index(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_keeps_working_under_autoplay() {
        let mut engine = CarouselEngine::new(&slides(3), Duration::from_secs(5));
        engine.start_autoplay();

        assert!(engine.go_to(2));
        assert_eq!(engine.current_index(), Some(2));

        tokio::time::sleep(Duration::from_millis(5100)).await;
        assert_eq!(engine.current_index(), Some(0));
    }
}
