//! Command-line interface and the cancellable image production loop

use crate::animation::{AnimationSettings, assemble, build_thread_pool};
use crate::io::configuration::{DEFAULT_GRACE_SECS, DEFAULT_IMAGE_NUMBER};
use crate::io::error::{Result, StarloopError, WithPath, invalid_parameter};
use crate::io::output::{OutputWriter, is_delivered_animation};
use crate::io::progress::ProgressManager;
use crate::io::shutdown::CancellationToken;
use crate::render::{Geometry, Palette};
use crate::scene::{SceneConfig, generate_stars};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "starloop")]
#[command(
    author,
    version,
    about = "Generate looping starfield flythrough GIFs"
)]
/// Command-line arguments, each overridable from the environment
pub struct Cli {
    /// Directory animations are written to (must exist)
    #[arg(long, env = "IMAGE_DIR", value_name = "DIR")]
    pub image_dir: PathBuf,

    /// Number of animations to produce
    #[arg(
        short = 'n',
        long,
        env = "IMAGE_NUMBER",
        default_value_t = DEFAULT_IMAGE_NUMBER
    )]
    pub image_number: u32,

    /// Directory whose entries are logged at startup
    #[arg(long, env = "PATH_DATASET", value_name = "DIR")]
    pub dataset: Option<PathBuf>,

    /// Path that must exist before generation starts
    #[arg(long, env = "PATH_MODEL", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Random seed (defaults to the current time)
    #[arg(short, long, env = "STARLOOP_SEED")]
    pub seed: Option<u64>,

    /// Worker threads used to render frames
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Seconds to keep producing after a termination signal
    #[arg(long, default_value_t = DEFAULT_GRACE_SECS)]
    pub grace_secs: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Delay between a termination signal and the loop stopping
    pub const fn grace(&self) -> Duration {
        Duration::from_secs(self.grace_secs)
    }

    /// Seed to use, falling back to wall-clock nanoseconds
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |elapsed| elapsed.as_nanos() as u64)
        })
    }

    /// Check every setting before any image is generated
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image directory is missing or not a directory
    /// - The image number is zero
    /// - The thread count is zero
    /// - A configured dataset directory or model path does not exist
    pub fn validate(&self) -> Result<()> {
        require_directory("IMAGE_DIR", &self.image_dir)?;
        if self.image_number == 0 {
            return Err(invalid_parameter(
                "IMAGE_NUMBER",
                &self.image_number,
                &"must be a positive integer",
            ));
        }
        if self.threads == Some(0) {
            return Err(invalid_parameter("threads", &0, &"must be at least 1"));
        }
        if let Some(ref dataset) = self.dataset {
            require_directory("PATH_DATASET", dataset)?;
        }
        if let Some(ref model) = self.model
            && !model.exists()
        {
            return Err(StarloopError::MissingPath {
                setting: "PATH_MODEL",
                path: model.clone(),
            });
        }
        Ok(())
    }
}

fn require_directory(setting: &'static str, path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(StarloopError::MissingPath {
            setting,
            path: path.to_path_buf(),
        });
    }
    if !path.is_dir() {
        return Err(invalid_parameter(
            setting,
            &path.display(),
            &"must be a directory",
        ));
    }
    Ok(())
}

/// List the entries of `dir`, sorted by name
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_directory(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).with_path(dir, "list directory")? {
        let entry = entry.with_path(dir, "list directory")?;
        names.push(entry.file_name().to_string_lossy().to_string());
    }
    names.sort();
    Ok(names)
}

/// Drives scene generation, rendering and delivery for a whole run
pub struct Generator {
    cli: Cli,
    scene: SceneConfig,
    geometry: Geometry,
    settings: AnimationSettings,
    progress_manager: Option<ProgressManager>,
}

impl Generator {
    /// Create a generator with the default scene, geometry and timing
    pub fn new(cli: Cli) -> Self {
        Self::with_settings(
            cli,
            SceneConfig::default(),
            Geometry::default(),
            AnimationSettings::default(),
        )
    }

    /// Create a generator with explicit scene, geometry and timing
    pub fn with_settings(
        cli: Cli,
        scene: SceneConfig,
        geometry: Geometry,
        settings: AnimationSettings,
    ) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            scene,
            geometry,
            settings,
            progress_manager,
        }
    }

    /// Produce animations until the requested number exist or `token` is cancelled
    ///
    /// Configuration is validated before any work starts. Returns the paths
    /// of the delivered animations in production order.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or any animation cannot be written;
    /// the run stops at the first failing image
    pub fn run(&mut self, token: &CancellationToken) -> Result<Vec<PathBuf>> {
        self.cli.validate()?;
        self.scene.validate()?;
        self.geometry.validate()?;
        self.settings.validate()?;

        let seed = self.cli.resolved_seed();
        tracing::info!(
            image_dir = %self.cli.image_dir.display(),
            image_number = self.cli.image_number,
            seed,
            "starting starfield generation"
        );
        self.log_inputs()?;

        let pool = build_thread_pool(self.cli.threads)?;
        let writer = OutputWriter::new(&self.cli.image_dir);
        let palette = Palette::grayscale();
        let mut rng = StdRng::seed_from_u64(seed);
        let image_count = self.cli.image_number as usize;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(image_count, self.settings.frame_count);
        }

        let mut delivered = Vec::with_capacity(image_count);
        for index in 0..image_count {
            if token.is_cancelled() {
                tracing::info!(
                    produced = delivered.len(),
                    requested = image_count,
                    "shutting down"
                );
                break;
            }

            let path = self.generate_image(index, &mut rng, &palette, &pool, &writer)?;
            delivered.push(path);
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(delivered)
    }

    #[tracing::instrument(skip(self, rng, palette, pool, writer))]
    fn generate_image(
        &self,
        index: usize,
        rng: &mut StdRng,
        palette: &Palette,
        pool: &rayon::ThreadPool,
        writer: &OutputWriter,
    ) -> Result<PathBuf> {
        let start_time = Instant::now();
        if let Some(ref pm) = self.progress_manager {
            pm.start_image(index);
        }

        let stars = generate_stars(rng, &self.scene);
        tracing::debug!(stars = stars.len(), "scene generated");

        let progress = self.progress_manager.as_ref();
        let animation = assemble(
            &stars,
            palette,
            &self.geometry,
            &self.settings,
            pool,
            |_| {
                if let Some(pm) = progress {
                    pm.frame_done();
                }
            },
        );

        let path = writer.write(&animation)?;
        let elapsed = start_time.elapsed();
        tracing::info!(
            path = %path.display(),
            elapsed_ms = elapsed.as_millis() as u64,
            "animation written"
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_image(&path, elapsed);
        }

        Ok(path)
    }

    fn log_inputs(&self) -> Result<()> {
        if let Some(ref dataset) = self.cli.dataset {
            let entries = list_directory(dataset)?;
            tracing::info!(
                dataset = %dataset.display(),
                entries = entries.len(),
                "dataset directory"
            );
            for name in &entries {
                tracing::info!("{name}");
            }
        }
        if let Some(ref model) = self.cli.model {
            tracing::info!(model = %model.display(), "model path present");
        }

        let existing = list_directory(&self.cli.image_dir)?
            .iter()
            .filter(|name| is_delivered_animation(Path::new(name)))
            .count();
        if existing > 0 {
            tracing::info!(existing, "output directory already holds animations");
        }
        Ok(())
    }
}
