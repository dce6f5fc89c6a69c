//! Event loop for a carousel.
//!
//! Runs on a single task. UI input arrives on an mpsc channel. Caption
//! fetches are started together and each result is applied as soon as it
//! lands, so a slow or hung fetch holds up neither navigation nor the other
//! captions. The animation phase is armed by a one-shot timer after the
//! silent first placement.

use std::sync::Arc;

use futures::stream::{self, LocalBoxStream, StreamExt};
use tokio::sync::mpsc;

use crate::binding::{MediaBinding, VisualBinding};
use crate::captions::{CaptionMode, resolve_caption};
use crate::controller::CarouselController;
use crate::fetch::CaptionFetcher;
use crate::messages::CarouselMessage;

#[derive(Debug)]
pub struct CarouselRuntime<V, M> {
    controller: CarouselController<V, M>,
    fetcher: Option<Arc<dyn CaptionFetcher>>,
}

impl<V, M> CarouselRuntime<V, M>
where
    V: VisualBinding,
    M: MediaBinding,
{
    /// `fetcher` is only consulted in resource mode. Without one, resource
    /// captions stay unresolved.
    pub fn new(
        controller: CarouselController<V, M>,
        fetcher: Option<Arc<dyn CaptionFetcher>>,
    ) -> Self {
        Self {
            controller,
            fetcher,
        }
    }

    /// Initialize the carousel and process input until `inbox` closes.
    /// Returns the controller so the host can inspect or reuse it.
    pub async fn run(
        mut self,
        mut inbox: mpsc::UnboundedReceiver<CarouselMessage>,
    ) -> CarouselController<V, M> {
        self.controller.initialize();

        let mut captions = self.caption_stream();
        let mut captions_done = false;

        let arm_timer = tokio::time::sleep(self.controller.config().arm_delay());
        tokio::pin!(arm_timer);
        let mut armed = false;

        loop {
            tokio::select! {
                biased;

                () = &mut arm_timer, if !armed => {
                    armed = true;
                    self.controller.update(CarouselMessage::ArmAnimation);
                }
                message = inbox.recv() => match message {
                    Some(message) => self.controller.update(message),
                    None => break,
                },
                resolved = captions.next(), if !captions_done => match resolved {
                    Some((index, text)) => self
                        .controller
                        .update(CarouselMessage::CaptionResolved { index, text }),
                    None => {
                        captions_done = true;
                        log::debug!("Caption resolution finished");
                    }
                },
            }
        }

        self.controller
    }

    fn caption_stream(&self) -> LocalBoxStream<'static, (usize, String)> {
        let captions = self.controller.captions();
        if captions.mode() != CaptionMode::Resource {
            return stream::empty().boxed_local();
        }

        let Some(fetcher) = self.fetcher.clone() else {
            log::warn!(
                "Resource captions configured without a fetcher; {} captions stay unresolved",
                captions.pending().len()
            );
            return stream::empty().boxed_local();
        };

        let pending = captions.pending();
        let in_flight = pending.len().max(1);
        stream::iter(pending)
            .map(move |request| {
                let fetcher = Arc::clone(&fetcher);
                async move {
                    let text =
                        resolve_caption(fetcher.as_ref(), &request.name).await;
                    (request.index, text)
                }
            })
            .buffer_unordered(in_flight)
            .boxed_local()
    }
}
