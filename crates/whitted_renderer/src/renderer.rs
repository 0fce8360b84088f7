//! Batch entry point for primary rays.
//!
//! Each ray's trace only reads the shared [`RenderData`], so batches are
//! split across the rayon thread pool without any synchronization.

use crate::{trace_recursive, Ray, RenderData};
use rayon::prelude::*;
use whitted_core::Color;

/// Trace every ray from depth 0 and return one radiance value per ray, in order.
pub fn trace_rays(data: &RenderData, rays: &[Ray]) -> Vec<Color> {
    log::debug!(
        "Tracing {} primary rays against {} objects and {} lights",
        rays.len(),
        data.context.get_active_scene().object_count(),
        data.context.get_active_scene().lights.len()
    );

    rays.par_iter()
        .map(|ray| trace_recursive(data, ray, 0))
        .collect()
}
