use anyhow::Context;
use wordshift_config::Config;
use wordshift_config::score::ScoreConfig;
use wordshift_types::Method;

use crate::SettingsArgs;

/// Config file (or defaults), then `WORDSHIFT_*` env, then flags
pub fn resolve(args: &SettingsArgs) -> anyhow::Result<Config> {
    let config = match &args.config {
        Some(path) => {
            let mut config = Config::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            config.apply_env();
            config
        }
        None => Config::new(),
    };

    apply_args(config, args)
}

/// Override `config` with command line flags and drop methods without a table
pub fn apply_args(mut config: Config, args: &SettingsArgs) -> anyhow::Result<Config> {
    if let Some(path) = &args.happiness_lexicon {
        config.lexicon.happiness_path = Some(path.clone());
    }
    if let Some(path) = &args.anew_lexicon {
        config.lexicon.anew_path = Some(path.clone());
    }
    if !args.methods.is_empty() {
        config.score.methods = args.methods.clone();
    }
    if let Some(min) = args.happiness_min {
        config.score.happiness_min = min;
    }
    if let Some(max) = args.happiness_max {
        config.score.happiness_max = max;
    }

    if config.score.happiness_min > config.score.happiness_max {
        anyhow::bail!(
            "happiness range is empty: min {} > max {}",
            config.score.happiness_min,
            config.score.happiness_max
        );
    }

    // Only score with lexicons that have a source
    config.score.methods.retain(|method| match method {
        Method::Happiness => config.lexicon.happiness_path.is_some(),
        Method::Anew => config.lexicon.anew_path.is_some(),
    });
    if config.score.methods.is_empty() {
        anyhow::bail!(
            "no lexicon available for the selected methods, \
             pass --happiness-lexicon or --anew-lexicon"
        );
    }

    tracing::debug!("Scoring with methods {:?}", config.score.methods);
    Ok(config)
}

/// Output switches of `score`: a flag turns a field on, it never turns off a configured one
pub fn score_outputs(score: &ScoreConfig, counts: bool, distribution: bool) -> ScoreConfig {
    let include_word_counts = counts || score.include_word_counts;
    let include_distribution = distribution || score.include_distribution;
    score
        .clone()
        .with_word_counts(include_word_counts)
        .with_distribution(include_distribution)
}
