#[cfg(test)]
mod tests {
    use crate::battle::engine::{attempt_action, resolve_move};
    use crate::battle::rng::TurnRng;
    use crate::battle::state::MoveOutcome;
    use crate::battle::tests::common::{move_data, TestCombatantBuilder};
    use crate::config::BattleConfig;
    use crate::pokemon::StatusCondition;
    use rstest::rstest;
    use schema::MoveId;

    #[test]
    fn test_sleep_prevents_action() {
        let mut attacker = TestCombatantBuilder::new("pikachu", 25)
            .with_status(StatusCondition::Sleep(2))
            .build();
        let mut defender = TestCombatantBuilder::new("charmander", 25).build();

        let mut rng = TurnRng::new_for_test(vec![]);
        let result = resolve_move(
            &mut attacker,
            &mut defender,
            move_data(MoveId::Tackle),
            &BattleConfig::default(),
            &mut rng,
        );

        assert_eq!(result.outcome, MoveOutcome::CouldNotAct);
        assert!(!result.could_act);
        assert!(!result.hit);
        assert_eq!(result.messages(), vec!["Pikachu is fast asleep!".to_string()]);
        assert_eq!(attacker.status, Some(StatusCondition::Sleep(1)));
        assert!(defender.is_at_full_hp());
    }

    #[test]
    fn test_waking_turn_is_lost() {
        let mut attacker = TestCombatantBuilder::new("pikachu", 25)
            .with_status(StatusCondition::Sleep(1))
            .build();
        let mut defender = TestCombatantBuilder::new("charmander", 25).build();
        let config = BattleConfig::default();

        let mut rng = TurnRng::new_for_test(vec![]);
        let result = resolve_move(
            &mut attacker,
            &mut defender,
            move_data(MoveId::Tackle),
            &config,
            &mut rng,
        );
        assert_eq!(result.outcome, MoveOutcome::CouldNotAct);
        assert_eq!(result.messages(), vec!["Pikachu woke up!".to_string()]);
        assert_eq!(attacker.status, None);

        // Next turn it acts normally
        let mut rng = TurnRng::new_for_test(vec![0.0, 0.9, 0.5]);
        let result = resolve_move(
            &mut attacker,
            &mut defender,
            move_data(MoveId::Tackle),
            &config,
            &mut rng,
        );
        assert_eq!(result.outcome, MoveOutcome::Hit);
    }

    #[test]
    fn test_sleep_counts_down_to_waking() {
        let mut pokemon = TestCombatantBuilder::new("pikachu", 25)
            .with_status(StatusCondition::Sleep(3))
            .build();
        let config = BattleConfig::default();
        let mut rng = TurnRng::new_for_test(vec![]);

        let mut turns_asleep = 0;
        loop {
            let check = attempt_action(&mut pokemon, &config, &mut rng);
            assert!(!check.can_act);
            turns_asleep += 1;
            if pokemon.status.is_none() {
                break;
            }
        }
        assert_eq!(turns_asleep, 3);
        assert!(attempt_action(&mut pokemon, &config, &mut rng).can_act);
    }

    #[test]
    fn test_full_paralysis_skips_the_turn() {
        let mut attacker = TestCombatantBuilder::new("pikachu", 25)
            .with_status(StatusCondition::Paralysis)
            .build();
        let mut defender = TestCombatantBuilder::new("charmander", 25).build();

        let mut rng = TurnRng::new_for_test(vec![0.1]);
        let result = resolve_move(
            &mut attacker,
            &mut defender,
            move_data(MoveId::Tackle),
            &BattleConfig::default(),
            &mut rng,
        );

        assert_eq!(result.outcome, MoveOutcome::CouldNotAct);
        assert_eq!(
            result.messages(),
            vec!["Pikachu is paralyzed! It can't move!".to_string()]
        );
        assert_eq!(attacker.status, Some(StatusCondition::Paralysis));
        assert_eq!(rng.remaining(), 0);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(0.2499, false)]
    #[case(0.25, true)]
    #[case(0.99, true)]
    fn test_paralysis_threshold(#[case] draw: f64, #[case] can_act: bool) {
        let mut pokemon = TestCombatantBuilder::new("pikachu", 25)
            .with_status(StatusCondition::Paralysis)
            .build();
        let mut rng = TurnRng::new_for_test(vec![draw]);
        let check = attempt_action(&mut pokemon, &BattleConfig::default(), &mut rng);
        assert_eq!(check.can_act, can_act);
        assert_eq!(check.events.is_empty(), can_act);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(StatusCondition::Burn))]
    #[case(Some(StatusCondition::Poison))]
    fn test_other_statuses_never_draw(#[case] status: Option<StatusCondition>) {
        let mut pokemon = TestCombatantBuilder::new("pikachu", 25).build();
        pokemon.status = status;
        let mut rng = TurnRng::new_for_test(vec![]);
        let check = attempt_action(&mut pokemon, &BattleConfig::default(), &mut rng);
        assert!(check.can_act);
        assert!(check.events.is_empty());
    }
}
