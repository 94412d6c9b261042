//! Unit tests for sp-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, TravelerId};

    #[test]
    fn ordering() {
        assert!(LocationId(0) < LocationId(1));
        assert!(TravelerId(100) > TravelerId(99));
    }

    #[test]
    fn display_and_from() {
        assert_eq!(LocationId(7).to_string(), "LocationId(7)");
        assert_eq!(LocationId::from(3), LocationId(3));
        assert_eq!(LocationId(3).get(), 3);
    }
}

#[cfg(test)]
mod geo {
    use crate::Position;

    #[test]
    fn distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
        assert_eq!(a.distance_to(a), 0.0);
    }

    #[test]
    fn cell_truncates() {
        assert_eq!(Position::new(3.9, 4.1).cell(), (3, 4));
    }
}

#[cfg(test)]
mod health {
    use crate::Health;

    #[test]
    fn ordered_worst_to_best() {
        assert!(Health::Dead < Health::Dying);
        assert!(Health::Dying < Health::Poor);
        assert!(Health::Poor < Health::Fair);
        assert!(Health::Fair < Health::Good);
        assert!(Health::Good < Health::Excellent);
    }

    #[test]
    fn thresholds() {
        assert_eq!(Health::from_energy(0.0), Health::Dead);
        assert_eq!(Health::from_energy(-3.0), Health::Dead);
        assert_eq!(Health::from_energy(0.1), Health::Dying);
        assert_eq!(Health::from_energy(25.0), Health::Dying);
        assert_eq!(Health::from_energy(25.1), Health::Poor);
        assert_eq!(Health::from_energy(50.0), Health::Poor);
        assert_eq!(Health::from_energy(60.0), Health::Fair);
        assert_eq!(Health::from_energy(75.0), Health::Fair);
        assert_eq!(Health::from_energy(75.5), Health::Excellent);
        assert_eq!(Health::from_energy(100.0), Health::Excellent);
    }

    #[test]
    fn settle_worsens_immediately() {
        assert_eq!(Health::Excellent.settle(100.0, 40.0), Health::Poor);
    }

    #[test]
    fn settle_does_not_promote_without_recovery() {
        // Good at 90 % walking to 85 % stays Good.
        assert_eq!(Health::Good.settle(90.0, 85.0), Health::Good);
    }

    #[test]
    fn settle_promotes_on_recovery() {
        assert_eq!(Health::Poor.settle(40.0, 80.0), Health::Excellent);
    }

    #[test]
    fn dead_is_terminal() {
        assert_eq!(Health::Dead.settle(0.0, 100.0), Health::Dead);
        assert!(!Health::Dead.is_alive());
    }

    #[test]
    fn parse_labels() {
        assert_eq!("Excellent".parse::<Health>().unwrap(), Health::Excellent);
        assert_eq!(" dying ".parse::<Health>().unwrap(), Health::Dying);
        assert!("sprightly".parse::<Health>().is_err());
        assert_eq!(Health::Fair.to_string(), "fair");
    }
}

#[cfg(test)]
mod tuning {
    use crate::{Health, Tuning};

    #[test]
    fn defaults() {
        let t = Tuning::default();
        assert_eq!(t.movement_factor(Health::Excellent), 0.6);
        assert_eq!(t.movement_factor(Health::Good), 0.75);
        assert_eq!(t.movement_factor(Health::Fair), 0.8);
        assert_eq!(t.movement_factor(Health::Poor), 1.0);
        assert_eq!(t.movement_factor(Health::Dying), 1.3);
        assert_eq!(t.gain_per_unit(Health::Excellent), 5.0);
        assert_eq!(t.gain_per_unit(Health::Dead), 0.0);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn table_set_get() {
        let mut t = Tuning::default();
        t.movement_factor.set(Health::Poor, 2.5);
        assert_eq!(t.movement_factor(Health::Poor), 2.5);
    }

    #[test]
    fn rejects_bad_values() {
        let mut t = Tuning::default();
        t.max_eat_fraction = 1.5;
        assert!(t.validate().is_err());

        let mut t = Tuning::default();
        t.movement_factor.set(Health::Fair, -1.0);
        assert!(t.validate().is_err());

        let mut t = Tuning::default();
        t.supernode_resource_multiplier = 0.5;
        assert!(t.validate().is_err());

        let mut t = Tuning::default();
        t.eat_threshold_pct = 120.0;
        assert!(t.validate().is_err());
    }
}

#[cfg(test)]
mod search {
    use std::time::Duration;

    use crate::SearchLimits;

    #[test]
    fn expansion_cap_is_exact() {
        let mut guard = SearchLimits::with_ceiling(Duration::from_secs(60))
            .max_expansions(5)
            .start();
        let granted = (0..100).take_while(|_| guard.tick()).count();
        assert_eq!(granted, 5);
        assert_eq!(guard.expansions(), 5);
        assert!(guard.expired());
        assert!(!guard.tick());
    }

    #[test]
    fn zero_ceiling_expires_on_first_check() {
        let mut guard = SearchLimits::with_ceiling(Duration::ZERO).start();
        assert!(!guard.tick());
        assert_eq!(guard.expansions(), 0);
    }

    #[test]
    fn presets() {
        assert_eq!(SearchLimits::mode1().time_ceiling, Duration::from_millis(1_000));
        assert_eq!(SearchLimits::mode2().time_ceiling, Duration::from_millis(1_200));
        assert_eq!(SearchLimits::default(), SearchLimits::mode2());
    }
}
