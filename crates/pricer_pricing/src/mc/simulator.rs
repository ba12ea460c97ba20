//! Terminal-value payoff simulation under geometric Brownian motion.
//!
//! One exact step to expiry per path:
//!
//! S_T = S·exp((r - σ²/2)·T + σ·√T·z),  z ~ N(0, 1)
//!
//! Payoffs are intrinsic values at S_T and are not discounted.

use rayon::prelude::*;
use tracing::debug;

use pricer_core::types::{CancellationToken, OptionContract, OptionKind, PricingError};

use super::config::SimulationConfig;
use super::sample::{PayoffSample, PricingResult};
use crate::rng::{derive_stream_seed, PricerRng};

/// Maps standard normal draws to terminal payoffs.
#[derive(Clone, Copy, Debug)]
struct TerminalPayoff {
    spot: f64,
    strike: f64,
    kind: OptionKind,
    drift: f64,
    diffusion: f64,
}

impl TerminalPayoff {
    fn new(contract: &OptionContract<f64>) -> Self {
        let sigma = contract.volatility();
        let maturity = contract.maturity();
        Self {
            spot: contract.spot(),
            strike: contract.strike(),
            kind: contract.kind(),
            drift: (contract.rate() - 0.5 * sigma * sigma) * maturity,
            diffusion: sigma * maturity.sqrt(),
        }
    }

    #[inline]
    fn payoff(&self, z: f64) -> f64 {
        let terminal = self.spot * (self.drift + self.diffusion * z).exp();
        self.kind.intrinsic(terminal, self.strike)
    }

    /// Replaces each normal draw in `buffer` with its payoff.
    #[inline]
    fn apply_in_place(&self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.payoff(*value);
        }
    }
}

/// Draws `num_simulations` terminal payoffs from `rng`.
///
/// Consumes exactly `num_simulations` normal draws from the generator, in
/// path order. Passing generators seeded identically yields identical samples.
///
/// # Errors
/// `PricingError::InvalidSampleCount(0)` if `num_simulations == 0`.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionContract;
/// use pricer_pricing::mc::simulate_payoffs;
/// use pricer_pricing::rng::PricerRng;
///
/// let call = OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let mut rng = PricerRng::from_seed(42);
///
/// let sample = simulate_payoffs(&call, 1000, &mut rng).unwrap();
/// assert_eq!(sample.len(), 1000);
/// assert!(sample.iter().all(|&v| v >= 0.0));
/// ```
pub fn simulate_payoffs(
    contract: &OptionContract<f64>,
    num_simulations: usize,
    rng: &mut PricerRng,
) -> Result<PayoffSample, PricingError> {
    if num_simulations == 0 {
        return Err(PricingError::InvalidSampleCount(num_simulations));
    }

    let mut values = vec![0.0; num_simulations];
    rng.fill_normal(&mut values);
    TerminalPayoff::new(contract).apply_in_place(&mut values);

    Ok(PayoffSample::from(values))
}

/// Batched payoff simulator.
///
/// Each batch owns a generator seeded from `derive_stream_seed(seed, batch)`
/// and writes a disjoint chunk of the output, so parallel and sequential runs
/// with the same seed produce the same sample.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionContract;
/// use pricer_pricing::mc::{MonteCarloSimulator, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_paths(20_000)
///     .seed(42)
///     .build()
///     .unwrap();
/// let simulator = MonteCarloSimulator::new(config);
///
/// let call = OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let result = simulator.price(&call).unwrap();
/// assert!((result.price - 10.45).abs() < 4.0 * result.std_error);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloSimulator {
    config: SimulationConfig,
}

impl MonteCarloSimulator {
    /// Creates a simulator from a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates one payoff per configured path.
    ///
    /// Without a configured seed, a base seed is drawn from entropy once per run.
    ///
    /// # Errors
    /// - `PricingError::InvalidSampleCount` for a zero path count
    /// - `PricingError::InvalidSimulationConfig` for a path count above
    ///   the cap or a zero batch size
    pub fn simulate(&self, contract: &OptionContract<f64>) -> Result<PayoffSample, PricingError> {
        self.run(contract, None)
    }

    /// Like [`MonteCarloSimulator::simulate`], checking `token` before each batch.
    ///
    /// # Errors
    /// `PricingError::Cancelled` once the token fires. `completed` is the
    /// index of the batch that observed it; under parallel execution other
    /// batches may already have finished.
    pub fn simulate_cancellable(
        &self,
        contract: &OptionContract<f64>,
        token: &CancellationToken,
    ) -> Result<PayoffSample, PricingError> {
        self.run(contract, Some(token))
    }

    /// Discounted mean payoff and its standard error.
    ///
    /// # Errors
    /// As [`MonteCarloSimulator::simulate`].
    pub fn price(&self, contract: &OptionContract<f64>) -> Result<PricingResult, PricingError> {
        let sample = self.simulate(contract)?;
        Ok(sample.discounted(contract.rate(), contract.maturity()))
    }

    fn run(
        &self,
        contract: &OptionContract<f64>,
        token: Option<&CancellationToken>,
    ) -> Result<PayoffSample, PricingError> {
        self.config.validate()?;

        let n_paths = self.config.n_paths();
        let batch_size = self.config.batch_size();
        let n_batches = self.config.n_batches();
        let parallel = self.config.parallel() && n_batches > 1;
        let seed = self
            .config
            .seed()
            .unwrap_or_else(|| PricerRng::from_entropy().gen_seed());

        debug!(
            paths = n_paths,
            batches = n_batches,
            seed,
            parallel,
            kind = %contract.kind(),
            "starting payoff simulation"
        );

        let terminal = TerminalPayoff::new(contract);
        let fill_batch = |(index, chunk): (usize, &mut [f64])| -> Result<(), PricingError> {
            if let Some(token) = token {
                token.check(index, n_batches)?;
            }
            let mut rng = PricerRng::from_seed(derive_stream_seed(seed, index as u64));
            rng.fill_normal(chunk);
            terminal.apply_in_place(chunk);
            Ok(())
        };

        let mut values = vec![0.0; n_paths];
        if parallel {
            values
                .par_chunks_mut(batch_size)
                .enumerate()
                .try_for_each(fill_batch)?;
        } else {
            values
                .chunks_mut(batch_size)
                .enumerate()
                .try_for_each(fill_batch)?;
        }

        let sample = PayoffSample::from(values);
        debug!(
            paths = n_paths,
            mean = sample.mean(),
            std_error = sample.std_error(),
            "finished payoff simulation"
        );
        Ok(sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn atm_call() -> OptionContract<f64> {
        OptionContract::call(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    fn config(paths: usize, parallel: bool) -> SimulationConfig {
        SimulationConfig::builder()
            .n_paths(paths)
            .batch_size(1000)
            .seed(42)
            .parallel(parallel)
            .build()
            .unwrap()
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let mut rng = PricerRng::from_seed(1);
        assert_eq!(
            simulate_payoffs(&atm_call(), 0, &mut rng),
            Err(PricingError::InvalidSampleCount(0))
        );
    }

    #[test]
    fn test_single_path_matches_hand_computation() {
        let mut reference = PricerRng::from_seed(11);
        let z = reference.gen_normal();
        let terminal = 100.0 * ((0.05 - 0.02) + 0.2 * z).exp();

        let mut rng = PricerRng::from_seed(11);
        let sample = simulate_payoffs(&atm_call(), 1, &mut rng).unwrap();
        assert_relative_eq!(sample.as_slice()[0], (terminal - 100.0).max(0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_same_seed_same_sample() {
        let mut a = PricerRng::from_seed(7);
        let mut b = PricerRng::from_seed(7);
        let first = simulate_payoffs(&atm_call(), 500, &mut a).unwrap();
        let second = simulate_payoffs(&atm_call(), 500, &mut b).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_generator_advances_between_calls() {
        let mut rng = PricerRng::from_seed(7);
        let first = simulate_payoffs(&atm_call(), 100, &mut rng).unwrap();
        let second = simulate_payoffs(&atm_call(), 100, &mut rng).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_put_payoffs_bounded_by_strike() {
        let put = atm_call().with_kind(OptionKind::Put);
        let mut rng = PricerRng::from_seed(3);
        let sample = simulate_payoffs(&put, 5000, &mut rng).unwrap();
        assert!(sample.iter().all(|&v| (0.0..100.0).contains(&v)));
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let contract = atm_call();
        let sequential = MonteCarloSimulator::new(config(10_500, false))
            .simulate(&contract)
            .unwrap();
        let parallel = MonteCarloSimulator::new(config(10_500, true))
            .simulate(&contract)
            .unwrap();
        assert_eq!(sequential.len(), 10_500);
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_simulator_reproducible_with_seed() {
        let simulator = MonteCarloSimulator::new(config(3000, true));
        let a = simulator.simulate(&atm_call()).unwrap();
        let b = simulator.simulate(&atm_call()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_simulator_different_seeds_differ() {
        let base = config(3000, true);
        let a = MonteCarloSimulator::new(base.with_seed(Some(1)))
            .simulate(&atm_call())
            .unwrap();
        let b = MonteCarloSimulator::new(base.with_seed(Some(2)))
            .simulate(&atm_call())
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_unseeded_runs_differ() {
        let simulator = MonteCarloSimulator::new(config(2000, true).with_seed(None));
        let a = simulator.simulate(&atm_call()).unwrap();
        let b = simulator.simulate(&atm_call()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let simulator = MonteCarloSimulator::new(config(5000, false));
        assert_eq!(
            simulator.simulate_cancellable(&atm_call(), &token),
            Err(PricingError::Cancelled {
                completed: 0,
                total: 5
            })
        );
    }

    #[test]
    fn test_cancelled_parallel_run_fails() {
        let token = CancellationToken::new();
        token.cancel();
        let simulator = MonteCarloSimulator::new(config(5000, true));
        assert!(matches!(
            simulator.simulate_cancellable(&atm_call(), &token),
            Err(PricingError::Cancelled { total: 5, .. })
        ));
    }

    #[test]
    fn test_price_discounts_mean() {
        let simulator = MonteCarloSimulator::new(config(4000, true));
        let contract = atm_call();
        let sample = simulator.simulate(&contract).unwrap();
        let result = simulator.price(&contract).unwrap();
        assert_relative_eq!(
            result.price,
            sample.mean() * (-0.05_f64).exp(),
            epsilon = 1e-12
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_payoffs_non_negative(
            spot in 10.0_f64..300.0,
            strike in 10.0_f64..300.0,
            volatility in 0.05_f64..1.5,
            seed in any::<u64>(),
            is_call in any::<bool>(),
        ) {
            let kind = if is_call { OptionKind::Call } else { OptionKind::Put };
            let contract = OptionContract::new(spot, strike, 1.0, 0.03, volatility, kind).unwrap();
            let mut rng = PricerRng::from_seed(seed);
            let sample = simulate_payoffs(&contract, 256, &mut rng).unwrap();
            prop_assert!(sample.iter().all(|&v| v >= 0.0 && v.is_finite()));
        }
    }
}
