//! Client-side polling session.
//!
//! A [`Session`] drives one URL through
//! `idle -> validating -> (live | processing) -> (completed | error)`,
//! re-checking a live video on a fixed interval until it stops being live.
//!
//! Every `submit` and `reset` starts a new epoch with a fresh cancellation
//! token. The poll timer checks the token before each re-check and state
//! updates from an older epoch are dropped, so nothing fires or lands after a
//! reset.

use crate::config::PollSettings;
use crate::domain::session::{
    SessionSnapshot, SessionStatus, VideoInfo, MSG_DOWNLOAD_REQUEST_FAILED, MSG_EMPTY_URL,
    MSG_INVALID_URL, MSG_PROCESS_FAILED, MSG_VIDEO_NOT_FOUND,
};
use crate::domain::video::{extract_video_id, VideoId};
use crate::ports::api::VideoApi;
use std::sync::{Mutex, MutexGuard};
use tokio::sync::watch;
use tokio::time::{interval_at, sleep, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

struct Control {
    epoch: u64,
    token: CancellationToken,
}

pub struct Session<A> {
    api: A,
    settings: PollSettings,
    state: watch::Sender<SessionSnapshot>,
    control: Mutex<Control>,
}

impl<A: VideoApi> Session<A> {
    pub fn new(api: A) -> Self {
        Self::with_settings(api, PollSettings::default())
    }

    pub fn with_settings(api: A, settings: PollSettings) -> Self {
        let (state, _) = watch::channel(SessionSnapshot::default());
        Self {
            api,
            settings,
            state,
            control: Mutex::new(Control {
                epoch: 0,
                token: CancellationToken::new(),
            }),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SessionStatus {
        self.state.borrow().status
    }

    /// Follow state changes as they are published.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    /// Run a URL through the whole flow. Returns once the session reaches a
    /// terminal state or is reset.
    pub async fn submit(&self, url: &str) -> SessionSnapshot {
        let (epoch, token) = self.begin();
        self.run(epoch, &token, url).await;
        self.snapshot()
    }

    /// Cancel any active timer and return to `idle`. Safe to call repeatedly.
    pub fn reset(&self) {
        let mut control = self.lock_control();
        control.token.cancel();
        control.epoch += 1;
        control.token = CancellationToken::new();
        self.state.send_replace(SessionSnapshot::default());
        tracing::debug!(epoch = control.epoch, "Session reset");
    }

    fn begin(&self) -> (u64, CancellationToken) {
        let mut control = self.lock_control();
        control.token.cancel();
        control.epoch += 1;
        control.token = CancellationToken::new();
        (control.epoch, control.token.clone())
    }

    fn lock_control(&self) -> MutexGuard<'_, Control> {
        self.control.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Apply `update` only if `epoch` is still the current one.
    fn publish<F>(&self, epoch: u64, update: F) -> bool
    where
        F: FnOnce(&mut SessionSnapshot),
    {
        let control = self.lock_control();
        if control.epoch != epoch {
            tracing::debug!(epoch, current = control.epoch, "Dropping stale session update");
            return false;
        }
        self.state.send_modify(update);
        true
    }

    fn fail(&self, epoch: u64, message: &str) {
        self.publish(epoch, |s| *s = SessionSnapshot::failed(message));
    }

    async fn run(&self, epoch: u64, token: &CancellationToken, url: &str) {
        if url.trim().is_empty() {
            self.fail(epoch, MSG_EMPTY_URL);
            return;
        }

        let Some(video_id) = extract_video_id(url) else {
            tracing::info!(url, "Unrecognised YouTube URL");
            self.fail(epoch, MSG_INVALID_URL);
            return;
        };

        self.publish(epoch, |s| {
            *s = SessionSnapshot {
                status: SessionStatus::Validating,
                info: VideoInfo::default(),
            }
        });

        let status = match self.api.check_video(&video_id).await {
            Ok(status) if status.valid => status,
            Ok(_) => {
                self.fail(epoch, MSG_VIDEO_NOT_FOUND);
                return;
            }
            Err(e) => {
                tracing::warn!(%video_id, error = %e, "Status check failed");
                self.fail(epoch, MSG_VIDEO_NOT_FOUND);
                return;
            }
        };

        let is_live = status.is_live_now();
        let recorded = self.publish(epoch, |s| {
            s.info.title = status.title;
            s.info.author = status.author;
            if is_live {
                s.status = SessionStatus::Live;
            }
        });
        if !recorded {
            return;
        }

        if is_live && !self.monitor(token, &video_id).await {
            return;
        }

        self.process(epoch, token, &video_id).await;
    }

    /// Re-check every interval until the video is no longer live.
    /// Returns `false` if the session was cancelled first.
    async fn monitor(&self, token: &CancellationToken, video_id: &VideoId) -> bool {
        let period = self.settings.interval;
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tracing::info!(%video_id, ?period, "Video is live, monitoring");

        loop {
            tokio::select! {
                _ = token.cancelled() => return false,
                _ = ticker.tick() => {}
            }
            if token.is_cancelled() {
                return false;
            }

            let still_live = match self.api.check_video(video_id).await {
                Ok(status) => status.is_live_now(),
                Err(e) => {
                    tracing::warn!(%video_id, error = %e, "Live re-check failed");
                    false
                }
            };
            if !still_live {
                tracing::info!(%video_id, "Live stream ended");
                return !token.is_cancelled();
            }
        }
    }

    async fn process(&self, epoch: u64, token: &CancellationToken, video_id: &VideoId) {
        if !self.publish(epoch, |s| s.status = SessionStatus::Processing) {
            return;
        }

        tokio::select! {
            _ = token.cancelled() => return,
            _ = sleep(self.settings.processing_delay) => {}
        }

        match self.api.download_video(video_id).await {
            Ok(link) if link.success => {
                tracing::info!(%video_id, "Download link ready");
                self.publish(epoch, |s| {
                    s.status = SessionStatus::Completed;
                    s.info.download_url = link.download_url;
                });
            }
            Ok(link) => {
                let message = link.error.unwrap_or_else(|| MSG_PROCESS_FAILED.to_string());
                self.publish(epoch, |s| {
                    s.status = SessionStatus::Error;
                    s.info.error_message = Some(message);
                });
            }
            Err(e) => {
                tracing::warn!(%video_id, error = %e, "Download request failed");
                self.publish(epoch, |s| {
                    s.status = SessionStatus::Error;
                    s.info.error_message = Some(MSG_DOWNLOAD_REQUEST_FAILED.to_string());
                });
            }
        }
    }
}

impl<A> Drop for Session<A> {
    fn drop(&mut self) {
        self.control
            .get_mut()
            .map(|control| control.token.cancel())
            .unwrap_or_else(|e| e.into_inner().token.cancel());
    }
}
