use std::sync::Arc;

use serde::{Serialize, de::DeserializeOwned};

use crate::{
    composition::{composition::Composition, ctx::FrameCtx},
    foundation::{
        core::{Canvas, Fps},
        error::{StudioError, StudioResult},
    },
    scene::model::Scene,
};

/// Catalog metadata of a template.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateInfo {
    /// Kebab-case id, e.g. `motivation-reel`.
    pub id: &'static str,
    /// PascalCase display name, e.g. `MotivationReel`.
    pub name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub canvas: Canvas,
    #[serde(serialize_with = "fps_as_number")]
    pub fps: Fps,
    #[serde(rename = "durationInFrames")]
    pub duration: u64,
}

fn fps_as_number<S: serde::Serializer>(fps: &Fps, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(fps.as_f64())
}

/// A parameterized composition: typed props in, one scene per frame out.
pub trait Template: Send + Sync + 'static {
    type Props: DeserializeOwned + Serialize + Default + Clone + Send + Sync + 'static;

    fn info(&self) -> TemplateInfo;

    /// Timeline length for `props`; templates whose length depends on content override this.
    fn duration_frames(&self, _props: &Self::Props) -> u64 {
        self.info().duration
    }

    fn draw(&self, ctx: &FrameCtx, props: &Self::Props) -> StudioResult<Scene>;
}

/// Object-safe view of a [`Template`] with JSON props.
pub trait DynTemplate: Send + Sync {
    fn info(&self) -> TemplateInfo;

    fn default_props(&self) -> StudioResult<serde_json::Value>;

    /// Build a composition from JSON props; `None` and `null` select the defaults.
    fn instantiate(self: Arc<Self>, props: Option<&serde_json::Value>)
    -> StudioResult<Composition>;
}

impl<T: Template> DynTemplate for T {
    fn info(&self) -> TemplateInfo {
        Template::info(self)
    }

    fn default_props(&self) -> StudioResult<serde_json::Value> {
        Ok(serde_json::to_value(T::Props::default())?)
    }

    fn instantiate(
        self: Arc<Self>,
        props: Option<&serde_json::Value>,
    ) -> StudioResult<Composition> {
        let info = Template::info(self.as_ref());
        let props: T::Props = match props {
            None | Some(serde_json::Value::Null) => T::Props::default(),
            Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
                StudioError::validation(format!("invalid props for '{}': {e}", info.id))
            })?,
        };
        let duration = self.duration_frames(&props);
        Composition::new(info.id, info.canvas, info.fps, duration, move |ctx| {
            self.draw(ctx, &props)
        })
    }
}
