use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trek_tactical::models::direction::Direction;
use trek_tactical::models::enterprise::Enterprise;
use trek_tactical::models::entity::{Damageable, EntityKind};
use trek_tactical::models::galaxy::{generate_galaxy, populate_sector_map, Galaxy};
use trek_tactical::models::klingon::Klingon;
use trek_tactical::models::message::MessageLog;
use trek_tactical::models::position::SectorPosition;
use trek_tactical::models::star::Star;
use trek_tactical::models::starbase::Starbase;
use trek_tactical::models::stardate::Stardate;
use trek_tactical::models::torpedo::{Torpedo, TorpedoOrigin};
use trek_tactical::services::combat::update_torpedoes;

proptest! {
    /// Property: generated quadrant counts add up to the requested totals
    #[test]
    fn galaxy_totals_match_request(
        seed in any::<u64>(),
        hostiles in 1u32..=320,
        starbases in 0u32..=64,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let quadrants = generate_galaxy(hostiles, starbases, &mut rng);

        prop_assert_eq!(quadrants.len(), 64);
        let hostile_sum: u32 = quadrants.iter().map(|q| q.hostiles).sum();
        let starbase_sum: u32 = quadrants.iter().map(|q| q.starbases).sum();
        prop_assert_eq!(hostile_sum, hostiles);
        prop_assert_eq!(starbase_sum, starbases);

        for (i, q) in quadrants.iter().enumerate() {
            prop_assert!(q.stars < 7, "quadrant {} has {} stars", i, q.stars);
            prop_assert!(q.hostiles <= 5);
            prop_assert!(q.starbases <= 1);
            prop_assert_eq!(q.position.y as usize * 8 + q.position.x as usize, i);
        }
    }

    /// Property: every quadrant's map holds exactly what its counters say
    #[test]
    fn sector_maps_match_counters(seed in any::<u64>()) {
        let galaxy = Galaxy::new(seed, 25, 5).unwrap();
        for q in galaxy.quadrants() {
            let is_active = q.position == galaxy.active_position();
            prop_assert_eq!(q.map.count(EntityKind::Hostile) as u32, q.hostiles);
            prop_assert_eq!(q.map.count(EntityKind::Star) as u32, q.stars);
            prop_assert_eq!(q.map.count(EntityKind::Starbase) as u32, q.starbases);
            prop_assert_eq!(q.map.count(EntityKind::Player), usize::from(is_active));
        }
        prop_assert_eq!(galaxy.remaining_hostiles(), 25);
        prop_assert_eq!(galaxy.remaining_starbases(), 5);
    }

    /// Property: no two objects share a sector
    #[test]
    fn placement_never_overlaps(
        seed in any::<u64>(),
        hostiles in 0u32..=5,
        stars in 0u32..7,
        starbases in 0u32..=1,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let map = populate_sector_map(hostiles, stars, starbases, &mut rng);
        let placed: Vec<SectorPosition> = map.entities().map(|(pos, _)| pos).collect();
        prop_assert_eq!(placed.len() as u32, hostiles + stars + starbases);
        for (pos, entity) in map.entities() {
            prop_assert!(pos.in_bounds());
            prop_assert_ne!(entity.kind(), EntityKind::Player);
        }
    }

    /// Property: shields soak damage first, the overflow costs double energy
    #[test]
    fn player_damage_model(
        shields in 0i32..5000,
        energy in 1i32..5000,
        damage in 0i32..5000,
    ) {
        let mut player = Enterprise::new(SectorPosition::new(0, 0));
        player.set_shields(shields);
        player.set_energy(energy);
        player.take_damage(damage);

        if damage <= shields {
            prop_assert_eq!(player.shields(), shields - damage);
            prop_assert_eq!(player.energy(), energy);
        } else {
            prop_assert_eq!(player.shields(), 0);
            prop_assert_eq!(player.energy(), (energy - 2 * (damage - shields)).max(0));
        }
    }

    /// Property: stars shrug off damage; hostiles and starbases lose exactly
    /// the damage dealt
    #[test]
    fn damage_rules_by_kind(damage in 1i32..20_000) {
        let at = SectorPosition::new(3, 3);

        let mut star = Star::new(at);
        let before = star.shield_strength();
        star.take_damage(damage);
        prop_assert_eq!(star.shield_strength(), before);
        prop_assert!(!star.is_destroyed());

        let mut klingon = Klingon::new(at);
        klingon.take_damage(damage);
        prop_assert_eq!(klingon.shield_strength(), 1000 - damage);
        prop_assert_eq!(klingon.is_destroyed(), damage >= 1000);

        let mut base = Starbase::new(at);
        base.take_damage(damage);
        prop_assert_eq!(base.shield_strength(), 10_000 - damage);
    }

    /// Property: shield allocation conserves the energy + shields pool
    #[test]
    fn shield_allocation_conserves_pool(
        energy in 0i32..5000,
        shields in 0i32..5000,
        requested in 0i32..1_000_000,
    ) {
        let mut player = Enterprise::new(SectorPosition::new(0, 0));
        player.set_energy(energy);
        player.set_shields(shields);
        player.allocate_shields(requested);

        prop_assert_eq!(player.energy() + player.shields(), energy + shields);
        prop_assert_eq!(player.shields(), requested.min(energy + shields));
    }

    /// Property: a torpedo stepping off the grid vanishes without a hit
    #[test]
    fn torpedo_leaving_grid_hits_nothing(seed in any::<u64>(), col in 0i32..10) {
        let mut galaxy = Galaxy::new(seed, 25, 5).unwrap();
        let mut ctx = galaxy.active().unwrap();
        let from = SectorPosition::new(col, 9);
        ctx.quadrant.map.clear_torpedoes();
        ctx.quadrant.map.put_torpedo(Torpedo::new(from, Direction::North, TorpedoOrigin::Player));
        let before = ctx.quadrant.map.clone();
        let messages = ctx.quadrant.messages.len();

        update_torpedoes(&mut ctx);

        prop_assert_eq!(ctx.quadrant.map.torpedo_count(), 0);
        prop_assert_eq!(ctx.quadrant.messages.len(), messages);
        let after: Vec<_> = ctx.quadrant.map.entities().map(|(p, e)| (p, *e)).collect();
        let expected: Vec<_> = before.entities().map(|(p, e)| (p, *e)).collect();
        prop_assert_eq!(after, expected);
    }

    /// Property: a message lives for exactly half a stardate
    #[test]
    fn message_expiry_window(created in 30_000u64..40_000, age in 0u64..20) {
        let mut log = MessageLog::new();
        let at = Stardate::from_tenths(created);
        log.push("Torpedo fired!", at);

        log.expire(Stardate::from_tenths(created + age));

        prop_assert_eq!(log.contains("Torpedo fired!"), age < 5);
    }
}
