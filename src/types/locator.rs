//! The core of the carrier locator library.
//!
//! The engine module holds a carrier table loaded once per session and
//! answers proximity queries against it. The ranking itself is done by
//! [`rank_nearest`](crate::nearest::rank_nearest); the engine adds the
//! logging policy around it.

/// The locator engine module.
pub mod engine {
    use crate::{
        carrier::CarrierRecord,
        carrier_table::CarrierTable,
        config::LocatorConfig,
        error::{InvalidInputError, LocatorError},
        location::Coordinate,
        nearest::rank_nearest,
        ranking::Ranking,
    };

    /// A CarrierLocator owns the carrier table and the default number
    /// of carriers to return.
    #[derive(Debug)]
    pub struct CarrierLocator {
        carriers: Vec<CarrierRecord>,
        default_count: usize,
    }

    impl CarrierLocator {
        /// Creates a new locator over the given carriers, returning 3
        /// carriers by default.
        pub fn new(carriers: Vec<CarrierRecord>) -> CarrierLocator {
            CarrierLocator {
                carriers,
                default_count: LocatorConfig::default().default_count,
            }
        }

        /// Loads the carrier table named by `config`.
        pub fn from_config(config: &LocatorConfig) -> Result<CarrierLocator, LocatorError> {
            info!("[1/2] Loading carrier table...");
            let table = CarrierTable::from_path(&config.data_path)?;
            info!("[2/2] Carrier locator ready with {} carriers", table.len());
            Ok(CarrierLocator {
                carriers: table.into_records(),
                default_count: config.default_count,
            })
        }

        /// Find the `n` carriers closest to `user`.
        ///
        /// Carriers with unusable location data are logged as a
        /// warning and listed in [`Ranking::skipped`].
        pub fn closest(
            &self,
            user: &Coordinate,
            n: usize,
        ) -> Result<Ranking<'_, CarrierRecord>, InvalidInputError> {
            info!("Finding the {} closest carriers", n);
            debug!("user: {:?}", user);
            let ranking = rank_nearest(user, &self.carriers, n)?;
            if ranking.skipped_count() > 0 {
                warn!(
                    "{} carriers had unusable location data",
                    ranking.skipped_count()
                );
                for skipped in &ranking.skipped {
                    debug!(
                        "skipped row {} ({}): {}",
                        skipped.index, skipped.label, skipped.reason
                    );
                }
            }
            info!("Found {} carriers", ranking.len());
            Ok(ranking)
        }

        /// Same as [`CarrierLocator::closest`] with the configured
        /// default count.
        pub fn closest_default(
            &self,
            user: &Coordinate,
        ) -> Result<Ranking<'_, CarrierRecord>, InvalidInputError> {
            self.closest(user, self.default_count)
        }

        /// Return the number of carriers in the table, usable or not.
        pub fn carrier_count(&self) -> usize {
            self.carriers.len()
        }

        /// Get all the carriers.
        pub fn carriers(&self) -> &[CarrierRecord] {
            &self.carriers
        }
    }
}
