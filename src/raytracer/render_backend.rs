use std::{cmp::min, sync::Arc, time::Instant};

use async_channel::Receiver;
use futures::future;
use tokio::sync::RwLock;
use tracing::{debug, error, info, trace};

use crate::raytracer::{Image, RenderError, RenderResult, Renderer};
use crate::utils;

const RENDER_TILE_MAX_SIZE: (usize, usize) = (64, 64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRenderWork {
    pub begin_pos: (usize, usize),
    pub tile_size: (usize, usize),
}

/// Split an image into row major tiles of at most RENDER_TILE_MAX_SIZE. The
/// last row and column take the remainder.
pub fn split_tiles(image_size: (usize, usize)) -> Vec<TileRenderWork> {
    let num_width_tiles = image_size.0.div_ceil(RENDER_TILE_MAX_SIZE.0);
    let num_height_tiles = image_size.1.div_ceil(RENDER_TILE_MAX_SIZE.1);

    let mut tiles = Vec::with_capacity(num_width_tiles * num_height_tiles);
    for ty in 0..num_height_tiles {
        let begin_height = ty * RENDER_TILE_MAX_SIZE.1;
        let tile_height = min(RENDER_TILE_MAX_SIZE.1, image_size.1 - begin_height);
        for tx in 0..num_width_tiles {
            let begin_width = tx * RENDER_TILE_MAX_SIZE.0;
            let tile_width = min(RENDER_TILE_MAX_SIZE.0, image_size.0 - begin_width);
            tiles.push(TileRenderWork {
                begin_pos: (begin_width, begin_height),
                tile_size: (tile_width, tile_height),
            });
        }
    }
    tiles
}

async fn local_render_tile_task(
    work_recv_queue: Receiver<TileRenderWork>,
    renderer: Arc<Renderer>,
    render_image: Arc<RwLock<Image>>,
) -> usize {
    let mut rendered_tiles = Vec::new();

    // Do render work until the closed queue is drained
    while let Ok(tile_render_work) = work_recv_queue.recv().await {
        let tile = renderer.render_tile(tile_render_work.begin_pos, tile_render_work.tile_size);
        rendered_tiles.push((tile_render_work.begin_pos, tile));
    }

    // Insert result tiles in render_image
    let mut image_guard = render_image.write().await;
    for (begin_pos, tile) in rendered_tiles.iter() {
        image_guard.insert_tile(tile, *begin_pos);
    }
    rendered_tiles.len()
}

/// Render timings. Every time value is measured in milliseconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderInfo {
    pub total_frames: usize,
    pub total_time: u128,
    pub last_time: u128,
    pub last_tiles: usize,
    pub avg_time_per_frame: u128,
}

impl RenderInfo {
    pub fn merge(&mut self, new: &RenderInfo) {
        self.total_frames += new.total_frames;
        self.total_time += new.total_time;
        self.last_time = new.last_time;
        self.last_tiles = new.last_tiles;
        self.avg_time_per_frame = self.total_time / self.total_frames.max(1) as u128;
    }
}

/// Render one frame into `render_image`, spreading tiles over as many tasks
/// as there are processors. The image must have the frame's size. Fails if
/// any render task failed, in which case the image is incomplete.
pub async fn render_task(
    renderer: Arc<Renderer>,
    render_image: Arc<RwLock<Image>>,
) -> RenderResult<RenderInfo> {
    // Measure execution time from here
    let render_start = Instant::now();

    let image_size = render_image.read().await.size();
    assert_eq!(
        image_size,
        renderer.frame().image_size(),
        "Render image size must match the frame size"
    );

    let tiles = split_tiles(image_size);
    let num_tiles = tiles.len();
    let (work_send_queue, work_recv_queue) = async_channel::unbounded::<TileRenderWork>();

    let num_local_tasks = min(utils::ideal_processors(), num_tiles).max(1);
    debug!(
        "Rendering {} tile(s) on {} task(s)",
        num_tiles, num_local_tasks
    );

    let mut local_handles = Vec::with_capacity(num_local_tasks);
    for _ in 0..num_local_tasks {
        local_handles.push(tokio::spawn(local_render_tile_task(
            work_recv_queue.clone(),
            renderer.clone(),
            render_image.clone(),
        )));
    }

    // Send work to queue, then close it. Queued tiles can still be received
    // after closing.
    for work in tiles {
        if work_send_queue.send(work).await.is_err() {
            break;
        }
    }
    work_send_queue.close();

    // Join all work task handles
    let mut failure = None;
    for (i, result) in future::join_all(local_handles).await.into_iter().enumerate() {
        match result {
            Ok(rendered) => trace!("Task {} rendered {} tile(s)", i, rendered),
            Err(e) => {
                error!("Render task {} failed: {}", i, e);
                failure.get_or_insert_with(|| RenderError::RenderFailed(e.to_string()));
            }
        }
    }
    if let Some(e) = failure {
        return Err(e);
    }

    // Log render time
    let render_time = render_start.elapsed().as_millis();
    info!(
        "Rendered {}x{} frame in {} ms",
        image_size.0, image_size.1, render_time
    );

    Ok(RenderInfo {
        total_frames: 1,
        total_time: render_time,
        last_time: render_time,
        last_tiles: num_tiles,
        avg_time_per_frame: render_time,
    })
}
