//! Atrium hub engine
//!
//! One cooperative, non-preemptive loop iteration at a time, in a fixed
//! order: refresh the sensor cache if the interval elapsed, fold touch
//! input into the view selection, redraw if needed, then service at most
//! one pending protocol request. Nothing blocks; the protocol response
//! always reflects the cache as of this iteration's refresh.
//!
//! The engine owns the cache, the schedule, and the collaborators
//! (sensor bus, touch pads, datagram link) for the life of the process.
//! The board binary constructs it once from a [`HubConfig`] and calls
//! [`Hub::poll`] forever with a monotonic millisecond clock.

#![no_std]
#![deny(unsafe_code)]

use atrium_core::cache::SensorCache;
use atrium_core::config::HubConfig;
use atrium_core::input::InputSelector;
use atrium_core::sample::ChannelId;
use atrium_core::scheduler::RefreshScheduler;
use atrium_core::traits::{Datagram, SensorBus, TouchPads};
use atrium_core::view::{View, ViewState};
use atrium_display::{Presenter, Redraw};
use atrium_protocol::{respond, MAX_DATAGRAM_LEN};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

/// The sensor-and-display hub
///
/// Single-threaded by construction: the scheduler is the only cache
/// writer, presenter and responder only read, so no locking is needed.
pub struct Hub<B, T, L> {
    config: HubConfig,
    cache: SensorCache,
    scheduler: RefreshScheduler,
    selector: InputSelector,
    view: ViewState,
    presenter: Presenter,
    bus: B,
    pads: T,
    link: L,
}

impl<B, T, L> Hub<B, T, L>
where
    B: SensorBus,
    T: TouchPads,
    L: Datagram,
{
    /// Build the hub once at startup
    ///
    /// The configuration is moved in and frozen; all channels start
    /// disabled.
    pub fn new(config: HubConfig, bus: B, pads: T, link: L) -> Self {
        let scheduler = RefreshScheduler::new(config.refresh_interval_ms);
        Self {
            config,
            cache: SensorCache::new(),
            scheduler,
            selector: InputSelector::new(),
            view: ViewState::new(),
            presenter: Presenter::new(),
            bus,
            pads,
            link,
        }
    }

    /// Run one loop iteration
    ///
    /// Returns what the presenter repainted, if anything. Display errors
    /// propagate; every other failure mode is absorbed per policy
    /// (stale reads, dropped requests).
    pub fn poll<D>(&mut self, now_ms: u32, display: &mut D) -> Result<Option<Redraw>, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.scheduler.poll(now_ms, &mut self.cache, &mut self.bus) {
            self.view.mark_dirty();
        }

        if let Some(tab) = self.selector.poll(&mut self.pads) {
            self.view.select(tab);
        }

        let redraw = self
            .presenter
            .update(&mut self.view, &self.cache, display)?;

        // At most one request per iteration, after the refresh, so the
        // reply never sees a partially updated cache.
        let mut buf = [0u8; MAX_DATAGRAM_LEN];
        if let Some(len) = self.link.poll_recv(&mut buf) {
            if let Some(reply) = respond(&self.config.base_name, &self.cache, &buf[..len]) {
                self.link.send(&reply);
            }
        }

        Ok(redraw)
    }

    /// Toggle sampling for one channel
    pub fn set_channel_enabled(&mut self, channel: ChannelId, enabled: bool) {
        self.cache.set_enabled(channel, enabled);
    }

    /// Replace the status message and schedule a repaint
    pub fn set_message(&mut self, message: &str) {
        self.presenter.set_message(message);
        self.view.mark_dirty();
    }

    /// Read access to the cache
    pub fn cache(&self) -> &SensorCache {
        &self.cache
    }

    /// Currently selected view
    pub fn selected_view(&self) -> View {
        self.view.selected()
    }
}
