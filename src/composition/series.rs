use crate::{
    components::transitions::Transition,
    composition::ctx::FrameCtx,
    foundation::error::{StudioError, StudioResult},
    scene::model::Node,
};

/// One entry of a [`Series`]: its length and how it enters over the previous segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub duration: u64,
    /// Transition from the previous segment and the number of overlapping frames.
    pub enter: Option<(Transition, u64)>,
}

/// A segment visible at some frame, with its start on the series timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Active {
    pub index: usize,
    pub start: f64,
    pub local_frame: f64,
}

/// Back-to-back segments; transitions overlap the tail of the previous segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    segments: Vec<Segment>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hard cuts between segments of the given lengths in seconds.
    pub fn from_secs(fps: crate::foundation::core::Fps, secs: &[f64]) -> Self {
        secs.iter()
            .fold(Self::new(), |s, d| s.then(fps.secs_to_frames_round(*d)))
    }

    pub fn then(mut self, duration: u64) -> Self {
        self.segments.push(Segment {
            duration,
            enter: None,
        });
        self
    }

    pub fn then_with(mut self, transition: Transition, overlap: u64, duration: u64) -> Self {
        self.segments.push(Segment {
            duration,
            enter: Some((transition, overlap)),
        });
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn validate(&self) -> StudioResult<()> {
        if self.segments.is_empty() {
            return Err(StudioError::validation("series needs at least one segment"));
        }
        let mut prev: Option<u64> = None;
        for (i, s) in self.segments.iter().enumerate() {
            if s.duration == 0 {
                return Err(StudioError::validation(format!(
                    "series segment {i} has zero duration"
                )));
            }
            if let Some((_, overlap)) = s.enter {
                let limit = prev.unwrap_or(0).min(s.duration);
                if overlap >= limit && overlap > 0 {
                    return Err(StudioError::validation(format!(
                        "series segment {i} overlap {overlap} must be shorter than both neighbours"
                    )));
                }
            }
            prev = Some(s.duration);
        }
        Ok(())
    }

    /// Start frame of every segment.
    pub fn starts(&self) -> Vec<u64> {
        let mut out = Vec::with_capacity(self.segments.len());
        let mut at = 0u64;
        for (i, s) in self.segments.iter().enumerate() {
            if i > 0 {
                at = at.saturating_sub(s.enter.map_or(0, |(_, o)| o));
            }
            out.push(at);
            at += s.duration;
        }
        out
    }

    pub fn total_frames(&self) -> u64 {
        let starts = self.starts();
        match (starts.last(), self.segments.last()) {
            (Some(start), Some(seg)) => start + seg.duration,
            _ => 0,
        }
    }

    /// Segments visible at `frame`, in paint order (at most two).
    ///
    /// Frames outside the series resolve to the first or last segment.
    pub fn active(&self, frame: f64) -> Vec<Active> {
        let starts = self.starts();
        let mut out: Vec<Active> = self
            .segments
            .iter()
            .zip(&starts)
            .enumerate()
            .filter(|(_, (s, start))| {
                let start = **start as f64;
                frame >= start && frame < start + s.duration as f64
            })
            .map(|(index, (_, start))| Active {
                index,
                start: *start as f64,
                local_frame: frame - *start as f64,
            })
            .collect();

        if out.is_empty() {
            let index = if frame < 0.0 {
                0
            } else {
                self.segments.len().saturating_sub(1)
            };
            if let (Some(seg), Some(start)) = (self.segments.get(index), starts.get(index)) {
                let start = *start as f64;
                let local = (frame - start).clamp(0.0, seg.duration.saturating_sub(1) as f64);
                out.push(Active {
                    index,
                    start,
                    local_frame: local,
                });
            }
        }
        out
    }

    /// Draw the segment(s) visible at `ctx.frame`, crossing over where a transition overlaps.
    ///
    /// `draw` receives the segment index and a context re-based to the segment start.
    pub fn compose<F>(&self, ctx: &FrameCtx, draw: F) -> StudioResult<Node>
    where
        F: Fn(usize, &FrameCtx) -> StudioResult<Node>,
    {
        self.validate()?;
        let active = self.active(ctx.frame);
        let render = |a: &Active| {
            let seg = &self.segments[a.index];
            let local = FrameCtx {
                frame: a.local_frame,
                duration: seg.duration,
                ..*ctx
            };
            draw(a.index, &local)
        };

        match active.as_slice() {
            [only] => render(only),
            [outgoing, incoming] => {
                let (transition, overlap) = self.segments[incoming.index]
                    .enter
                    .unwrap_or((Transition::Fade, 0));
                Ok(transition.cross(
                    ctx,
                    render(outgoing)?,
                    render(incoming)?,
                    incoming.start,
                    overlap as f64,
                ))
            }
            _ => Err(StudioError::evaluation(format!(
                "series resolved {} segments at frame {}",
                active.len(),
                ctx.frame
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/series.rs"]
mod tests;
