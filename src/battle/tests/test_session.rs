#[cfg(test)]
mod tests {
    use crate::battle::rng::{RandomSource, TurnRng};
    use crate::battle::session::BattleSession;
    use crate::battle::state::MoveOutcome;
    use crate::battle::tests::common::{constant_rng, dex, TestCombatantBuilder};
    use crate::config::BattleConfig;
    use crate::pokemon::{STAGE_MAX, STAGE_MIN};
    use pretty_assertions::assert_eq;
    use schema::{MoveId, StatKey};

    #[test]
    fn test_use_move_slot_spends_one_use() {
        let mut session = BattleSession::new(
            dex(),
            BattleConfig::default(),
            TurnRng::new_for_test(vec![0.0, 0.9, 0.5]),
        );
        let mut attacker = TestCombatantBuilder::new("rattata", 20)
            .with_moves(vec![MoveId::Tackle])
            .build();
        let mut defender = TestCombatantBuilder::new("charmander", 20).build();
        let max_uses = attacker.moves[0].max_uses;

        let result = session
            .use_move_slot(&mut attacker, &mut defender, 0)
            .unwrap()
            .unwrap();
        assert_eq!(result.outcome, MoveOutcome::Hit);
        assert_eq!(attacker.moves[0].uses, max_uses - 1);
        assert_eq!(session.rng_mut().remaining(), 0);
    }

    #[test]
    fn test_use_is_spent_even_when_the_move_cannot_act() {
        let mut session = BattleSession::new(dex(), BattleConfig::default(), TurnRng::new_for_test(vec![]));
        let mut attacker = TestCombatantBuilder::new("rattata", 20)
            .with_moves(vec![MoveId::Tackle])
            .with_status(crate::pokemon::StatusCondition::Sleep(2))
            .build();
        let mut defender = TestCombatantBuilder::new("charmander", 20).build();
        let max_uses = attacker.moves[0].max_uses;

        let result = session
            .use_move_slot(&mut attacker, &mut defender, 0)
            .unwrap()
            .unwrap();
        assert_eq!(result.outcome, MoveOutcome::CouldNotAct);
        assert_eq!(attacker.moves[0].uses, max_uses - 1);
    }

    #[test]
    fn test_exhausted_or_missing_slot_resolves_nothing() {
        let mut session = BattleSession::new(dex(), BattleConfig::default(), TurnRng::new_for_test(vec![]));
        let mut attacker = TestCombatantBuilder::new("rattata", 20)
            .with_moves(vec![MoveId::Tackle])
            .build();
        let mut defender = TestCombatantBuilder::new("charmander", 20).build();
        attacker.moves[0].uses = 0;

        assert!(session
            .use_move_slot(&mut attacker, &mut defender, 0)
            .unwrap()
            .is_none());
        assert!(session
            .use_move_slot(&mut attacker, &mut defender, 9)
            .unwrap()
            .is_none());
        assert_eq!(attacker.moves[0].uses, 0);
        assert!(defender.is_at_full_hp());
    }

    #[test]
    fn test_resolve_move_leaves_slots_alone() {
        let mut session = BattleSession::new(
            dex(),
            BattleConfig::default(),
            TurnRng::new_for_test(vec![0.0, 0.9, 0.5]),
        );
        let mut attacker = TestCombatantBuilder::new("rattata", 20)
            .with_moves(vec![MoveId::Tackle])
            .build();
        let mut defender = TestCombatantBuilder::new("charmander", 20).build();
        let before = attacker.moves.clone();

        session
            .resolve_move(&mut attacker, &mut defender, MoveId::Tackle)
            .unwrap();
        assert_eq!(attacker.moves, before);
    }

    #[test]
    fn test_session_catch_uses_its_rng() {
        let mut session = BattleSession::new(dex(), BattleConfig::default(), constant_rng(0.0, 4));
        let target = TestCombatantBuilder::new("rattata", 5).with_hp(1).build();

        let result = session.attempt_catch(&target, 1.0);
        assert!(result.caught);
        assert_eq!(result.shakes, 4);
        assert_eq!(result.messages(), vec!["Gotcha! Rattata was caught!".to_string()]);
    }

    #[test]
    fn test_seeded_battle_keeps_invariants() {
        let mut session = BattleSession::new(dex(), BattleConfig::default(), RandomSource::seeded(7));
        let mut a = TestCombatantBuilder::new("pikachu", 18).build();
        let mut b = TestCombatantBuilder::new("geodude", 18).build();
        session.apply_battle_entry_abilities(&mut a, &mut b);

        for _ in 0..60 {
            if a.is_fainted() || b.is_fainted() {
                break;
            }
            let Some(a_slot) = session.choose_move(&a, &b) else { break };
            let Some(b_slot) = session.choose_move(&b, &a) else { break };
            assert!(a.moves[a_slot].has_uses());
            assert!(b.moves[b_slot].has_uses());

            let order = session
                .turn_order(&a, a.moves[a_slot].move_id, &b, b.moves[b_slot].move_id)
                .unwrap();
            for side in order.indices() {
                let (attacker, defender, slot) = if side == 0 {
                    (&mut a, &mut b, a_slot)
                } else {
                    (&mut b, &mut a, b_slot)
                };
                if attacker.is_fainted() || defender.is_fainted() {
                    continue;
                }
                session.use_move_slot(attacker, defender, slot).unwrap();
            }
            session.apply_end_of_turn_status(&mut a);
            session.apply_end_of_turn_status(&mut b);

            for pokemon in [&a, &b] {
                assert!(pokemon.current_hp() <= pokemon.max_hp());
                for stat in [StatKey::Atk, StatKey::Def, StatKey::SpAtk, StatKey::SpDef, StatKey::Spe] {
                    let stage = pokemon.stat_stages.get(stat);
                    assert!((STAGE_MIN..=STAGE_MAX).contains(&stage));
                }
                for slot in &pokemon.moves {
                    assert!(slot.uses <= slot.max_uses);
                }
            }
        }
    }
}
