use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use rayon::ThreadPoolBuildError;

use crate::config::EngineConfig;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::generate_fractal::fill_matrix::MatrixFiller;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::rendered_image::RenderedImage;
use crate::core::errors::RenderError;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::julia::colour_mapping::errors::PaletteError;
use crate::core::fractals::julia::colour_mapping::map::GradientColourMap;
use crate::core::fractals::julia::colour_mapping::palette::Palette;
use crate::core::fractals::julia::errors::julia::JuliaError;
use crate::core::fractals::julia::params::JuliaParameters;
use crate::presenters::file::png::PngFilePresenter;
use crate::storage::image_folder::{ImageFolder, StorageError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// An image for one of the candidate ids was already in the folder.
    Reused(String),
    Rendered(RenderedImage),
}

impl RenderOutcome {
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Reused(file_name) => file_name,
            Self::Rendered(image) => image.file_name(),
        }
    }
}

/// Swaps in a palette for `params`, keeping the cached one when it already matches.
fn refresh_palette<'a>(
    cached: &'a mut Option<Palette>,
    params: &JuliaParameters,
) -> Result<&'a Palette, PaletteError> {
    let anchors = params.anchor_colours();
    let size = params.palette_size();

    let palette = match cached.take() {
        Some(palette) => {
            if palette.matches(anchors, size) {
                debug!("reusing cached palette of {} colours", size);
            } else {
                debug!("rebuilding palette with {} colours", size);
            }
            palette.rebuilt(anchors, size)?
        }
        None => Palette::build(anchors, size)?,
    };

    Ok(cached.insert(palette))
}

/// Runs the whole pipeline for one request: fill, colour, encode, store.
pub struct JuliaRenderController<P: FilePresenterPort = PngFilePresenter> {
    filler: MatrixFiller,
    folder: ImageFolder,
    presenter: P,
    palette: Option<Palette>,
}

impl JuliaRenderController<PngFilePresenter> {
    pub fn from_config(config: &EngineConfig) -> Result<Self, ThreadPoolBuildError> {
        let filler = MatrixFiller::new(config.max_threads(), config.max_wait_time())?;

        Ok(Self::new(
            filler,
            ImageFolder::new(config.image_folder()),
            PngFilePresenter::new(),
        ))
    }
}

impl<P: FilePresenterPort> JuliaRenderController<P> {
    #[must_use]
    pub fn new(filler: MatrixFiller, folder: ImageFolder, presenter: P) -> Self {
        Self {
            filler,
            folder,
            presenter,
            palette: None,
        }
    }

    #[must_use]
    pub fn folder(&self) -> &ImageFolder {
        &self.folder
    }

    /// The palette used by the most recent render, if any.
    #[must_use]
    pub fn palette(&self) -> Option<&Palette> {
        self.palette.as_ref()
    }

    pub fn find_existing<S: AsRef<str>>(&self, ids: &[S]) -> Result<String, StorageError> {
        self.folder.find_existing(ids)
    }

    /// Renders `params` and stores the result as `<id>.<ext>` in the image folder.
    pub fn render<C>(
        &mut self,
        params: &JuliaParameters,
        id: &str,
        cancel: &C,
    ) -> Result<RenderedImage, RenderError>
    where
        C: CancelToken + ?Sized,
    {
        let started = Instant::now();
        let Self {
            filler,
            folder,
            presenter,
            palette,
        } = self;

        let palette = refresh_palette(palette, params).map_err(JuliaError::from)?;
        let matrix = filler.fill(Arc::new(JuliaAlgorithm::new(params)), cancel)?;

        let colour_map = GradientColourMap::new(palette, params.interior_colour());
        let pixels = generate_pixel_buffer(matrix, &colour_map);

        let extension = presenter.extension();
        let bytes = presenter
            .encode(&pixels)
            .map_err(|source| StorageError::Encode {
                path: folder.path_of(&format!("{id}.{extension}")),
                source,
            })?;

        let image = RenderedImage::new(id, extension, bytes);
        let path = folder.store(&image)?;

        info!(
            "rendered {}x{} julia set for c = {} to {} in {:?}",
            pixels.width(),
            pixels.height(),
            params.c(),
            path.display(),
            started.elapsed()
        );

        Ok(image)
    }

    /// Returns an image already stored under one of `candidate_ids` when there is
    /// one, otherwise renders `params` under `new_id`.
    pub fn render_or_reuse<S, C>(
        &mut self,
        params: &JuliaParameters,
        candidate_ids: &[S],
        new_id: &str,
        cancel: &C,
    ) -> Result<RenderOutcome, RenderError>
    where
        S: AsRef<str>,
        C: CancelToken + ?Sized,
    {
        if self.folder.root().is_dir() {
            let existing = self.folder.find_existing(candidate_ids)?;

            if !existing.is_empty() {
                info!("reusing stored image {}", existing);
                return Ok(RenderOutcome::Reused(existing));
            }
        }

        self.render(params, new_id, cancel)
            .map(RenderOutcome::Rendered)
    }
}
