use uno_engine::{Card, Color, Game, GameError, InvalidPlay, TurnState, Value};

fn rigged_deck(hands: &[&[Card]], opening: Card, draw_sequence: &[Card]) -> Vec<Card> {
    let mut deck: Vec<Card> = draw_sequence.iter().rev().copied().collect();
    deck.push(opening);
    for hand in hands.iter().rev() {
        deck.extend(hand.iter().rev().copied());
    }
    deck
}

fn rigged_game(hands: &[&[Card]], opening: Card, draw_sequence: &[Card]) -> Result<Game, GameError> {
    let mut game = Game::builder()
        .with_deck(rigged_deck(hands, opening, draw_sequence))
        .build();
    for (i, _) in hands.iter().enumerate() {
        game.add_player(format!("Player {i}"))?;
    }
    game.start_game()?;
    Ok(game)
}

fn blue_nines() -> Vec<Card> {
    vec![Card::new(Color::Blue, Value::Number(9)); 7]
}

#[test]
fn draw_two_without_counter_delivers_immediately() -> Result<(), GameError> {
    let p0: Vec<Card> = std::iter::once(Card::new(Color::Red, Value::DrawTwo))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    let p1 = blue_nines();
    let opening = Card::new(Color::Red, Value::Number(3));
    let draws = [Card::new(Color::Green, Value::Number(1)); 4];
    let mut game = rigged_game(&[&p0, &p1], opening, &draws)?;

    game.play_card(0, 0, None)?;
    assert_eq!(game.hand(1)?.len(), 9, "penalty of two lands at once");
    assert_eq!(game.turn_state(), TurnState::AwaitingPlay);
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn draw_two_stacks_onto_a_counter_holder() -> Result<(), GameError> {
    let p0: Vec<Card> = std::iter::once(Card::new(Color::Red, Value::DrawTwo))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    // Seat 1 can counter; seat 2 cannot.
    let p1: Vec<Card> = std::iter::once(Card::new(Color::Blue, Value::DrawTwo))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    let p2 = blue_nines();
    let opening = Card::new(Color::Red, Value::Number(3));
    let draws = [Card::new(Color::Green, Value::Number(1)); 6];
    let mut game = rigged_game(&[&p0, &p1, &p2], opening, &draws)?;

    game.play_card(0, 0, None)?;
    // Stack passes unresolved: no cards drawn anywhere.
    assert_eq!(game.turn_state(), TurnState::PendingDraw { count: 2 });
    assert_eq!(game.current_player(), 1);
    assert_eq!(game.hand(1)?.len(), 7);

    // Seat 1 counters; seat 2 holds no Draw Two, so four cards land there.
    game.play_card(1, 0, None)?;
    assert_eq!(game.turn_state(), TurnState::AwaitingPlay);
    assert_eq!(game.current_player(), 2);
    assert_eq!(game.hand(1)?.len(), 6);
    assert_eq!(game.hand(2)?.len(), 11);
    Ok(())
}

#[test]
fn pending_stack_blocks_every_other_play() -> Result<(), GameError> {
    let p0: Vec<Card> = std::iter::once(Card::new(Color::Red, Value::DrawTwo))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    let p1: Vec<Card> = vec![
        Card::new(Color::Blue, Value::DrawTwo),
        // Playable on the Red Draw Two by color, but barred by the stack.
        Card::new(Color::Red, Value::Number(7)),
        Card::new(Color::Wild, Value::Wild),
    ];
    let p1: Vec<Card> = p1
        .into_iter()
        .chain(blue_nines().into_iter().take(4))
        .collect();
    let opening = Card::new(Color::Red, Value::Number(3));
    let mut game = rigged_game(&[&p0, &p1], opening, &[])?;

    game.play_card(0, 0, None)?;
    assert_eq!(game.turn_state(), TurnState::PendingDraw { count: 2 });

    assert!(matches!(
        game.play_card(1, 1, None),
        Err(GameError::InvalidPlay(InvalidPlay::MustStackOrDraw { pending: 2 }))
    ));
    // Wilds are no way out either.
    assert!(matches!(
        game.play_card(1, 2, Some(Color::Green)),
        Err(GameError::InvalidPlay(InvalidPlay::MustStackOrDraw { pending: 2 }))
    ));
    assert_eq!(game.hand(1)?.len(), 7);
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn pending_stack_can_be_absorbed_by_drawing() -> Result<(), GameError> {
    let p0: Vec<Card> = std::iter::once(Card::new(Color::Red, Value::DrawTwo))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    let p1: Vec<Card> = std::iter::once(Card::new(Color::Blue, Value::DrawTwo))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    let opening = Card::new(Color::Red, Value::Number(3));
    let draws = [Card::new(Color::Green, Value::Number(1)); 4];
    let mut game = rigged_game(&[&p0, &p1], opening, &draws)?;

    game.play_card(0, 0, None)?;
    assert_eq!(game.turn_state(), TurnState::PendingDraw { count: 2 });

    // Seat 1 holds a counter but chooses to take the two cards instead.
    game.draw_card(1)?;
    assert_eq!(game.hand(1)?.len(), 9);
    assert_eq!(game.turn_state(), TurnState::AwaitingPlay);
    assert_eq!(game.current_player(), 0);
    Ok(())
}

#[test]
fn wild_draw_four_never_stacks() -> Result<(), GameError> {
    let p0: Vec<Card> = std::iter::once(Card::new(Color::Wild, Value::WildDrawFour))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    // The victim holding a Draw Two makes no difference.
    let p1: Vec<Card> = std::iter::once(Card::new(Color::Green, Value::DrawTwo))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    let p2 = blue_nines();
    let opening = Card::new(Color::Red, Value::Number(3));
    let draws = [Card::new(Color::Green, Value::Number(1)); 4];
    let mut game = rigged_game(&[&p0, &p1, &p2], opening, &draws)?;

    game.play_card(0, 0, Some(Color::Yellow))?;
    assert_eq!(game.top_card(), Some(Card::new(Color::Yellow, Value::WildDrawFour)));
    assert_eq!(game.hand(1)?.len(), 11);
    assert_eq!(game.turn_state(), TurnState::AwaitingPlay);
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn wild_draw_four_requires_a_color() -> Result<(), GameError> {
    let p0: Vec<Card> = std::iter::once(Card::new(Color::Wild, Value::WildDrawFour))
        .chain(blue_nines().into_iter().take(6))
        .collect();
    let p1 = blue_nines();
    let opening = Card::new(Color::Red, Value::Number(3));
    let mut game = rigged_game(&[&p0, &p1], opening, &[])?;

    assert!(matches!(
        game.play_card(0, 0, None),
        Err(GameError::InvalidPlay(InvalidPlay::WildRequiresColor))
    ));
    assert_eq!(game.hand(0)?.len(), 7);
    assert_eq!(game.hand(1)?.len(), 7);
    Ok(())
}

#[test]
fn penalty_triggers_reshuffle_and_keeps_top_discard() -> Result<(), GameError> {
    // Skips keep the turn at seat 0 so the discard pile can grow while the
    // draw pile sits empty; the Draw Two then forces a reshuffle mid-penalty.
    let p0: Vec<Card> = vec![
        Card::new(Color::Red, Value::Skip),
        Card::new(Color::Red, Value::Skip),
        Card::new(Color::Red, Value::DrawTwo),
    ]
    .into_iter()
    .chain(blue_nines().into_iter().take(4))
    .collect();
    let p1 = blue_nines();
    let opening = Card::new(Color::Red, Value::Number(3));
    let mut game = rigged_game(&[&p0, &p1], opening, &[])?;
    assert_eq!(game.draw_pile_count(), 0);

    game.play_card(0, 0, None)?;
    game.play_card(0, 0, None)?;
    assert_eq!(game.current_player(), 0);
    assert_eq!(game.discard_pile_count(), 3);

    game.play_card(0, 0, None)?;
    // The three older discards were recycled to cover the penalty; only the
    // just-played Draw Two remains on the pile.
    assert_eq!(game.hand(1)?.len(), 9);
    assert_eq!(game.discard_pile_count(), 1);
    assert_eq!(game.top_card(), Some(Card::new(Color::Red, Value::DrawTwo)));
    assert_eq!(game.draw_pile_count(), 1);
    Ok(())
}

/// Total card population stays at 108 across a whole seeded game, whatever
/// mixture of plays, draws, penalties and reshuffles occurs.
#[test]
fn card_population_is_conserved() -> Result<(), GameError> {
    fn total(game: &Game) -> usize {
        let hands: usize = (0..game.player_count())
            .map(|p| game.hand(p).map(<[Card]>::len).unwrap_or(0))
            .sum();
        game.draw_pile_count() + game.discard_pile_count() + hands
    }

    for seed in [1, 2, 3, 4, 5] {
        let mut game = Game::builder().with_seed(seed).build();
        game.add_player("Alice")?;
        game.add_player("Bob")?;
        game.add_player("Carol")?;
        game.start_game()?;
        assert_eq!(total(&game), 108);

        for _ in 0..300 {
            if game.is_game_over().0 {
                break;
            }
            let me = game.current_player();
            if let TurnState::PendingDraw { .. } = game.turn_state() {
                game.draw_card(me)?;
            } else {
                let top = game.top_card().expect("game started");
                let hand = game.hand(me)?.to_vec();
                match hand.iter().position(|card| card.is_playable(&top)) {
                    Some(index) => {
                        let color = hand[index].is_wild().then_some(Color::Red);
                        game.play_card(me, index, color)?;
                    }
                    None => game.draw_card(me)?,
                }
            }
            assert_eq!(total(&game), 108, "population drifted (seed {seed})");
        }
    }
    Ok(())
}
