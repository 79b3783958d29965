//! Mutations over the match/roster document.
//!
//! Every operation follows the same shape: validate against the current
//! document, mutate in memory, persist best-effort, then broadcast the full
//! document so display clients converge on the committed state. Validation
//! failures reject before any mutation and nothing is broadcast.

use crate::{
    dao::documents::{MatchDocument, TeamConfig, TeamSide},
    dto::requests::{
        AddCardRequest, AddGoalRequest, CardKind, CustomizationUpdate, PlayerUpsert,
        SetScoreRequest, TeamInfoPatch, TeamInfoUpdate,
    },
    error::ServiceError,
    services::ws_events,
    state::SharedState,
};

/// Snapshot of the full match document.
pub async fn full_document(state: &SharedState) -> MatchDocument {
    state.store().match_doc().get().await
}

/// Set one team's score to an exact value, clamping negatives to zero.
pub async fn set_score(
    state: &SharedState,
    request: SetScoreRequest,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        doc.team_mut(request.team).score = request.score.max(0) as u32;
        Ok(())
    })
    .await
}

/// Patch both teams' names and abbreviations.
pub async fn update_team_info(
    state: &SharedState,
    update: TeamInfoUpdate,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        apply_team_patch(doc.team_mut(TeamSide::TeamA), update.team_a);
        apply_team_patch(doc.team_mut(TeamSide::TeamB), update.team_b);
        Ok(())
    })
    .await
}

/// Replace both teams' strip colors. The payload is validated by the route.
pub async fn update_colors(
    state: &SharedState,
    update: CustomizationUpdate,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        doc.team_mut(TeamSide::TeamA).colors = update.team_a.into();
        doc.team_mut(TeamSide::TeamB).colors = update.team_b.into();
        Ok(())
    })
    .await
}

/// Add a player to a team roster. The shirt number must be free.
pub async fn add_player(
    state: &SharedState,
    side: TeamSide,
    input: PlayerUpsert,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        let team = doc.team_mut(side);
        if team.player(input.number).is_some() {
            return Err(ServiceError::InvalidInput(format!(
                "player number {} is already taken on {}",
                input.number,
                side.as_str()
            )));
        }
        team.players.push(input.into());
        Ok(())
    })
    .await
}

/// Replace a player identified by shirt number. The number may change as
/// long as the new one is free.
pub async fn edit_player(
    state: &SharedState,
    side: TeamSide,
    number: u8,
    input: PlayerUpsert,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        let team = doc.team_mut(side);
        if input.number != number && team.player(input.number).is_some() {
            return Err(ServiceError::InvalidInput(format!(
                "player number {} is already taken on {}",
                input.number,
                side.as_str()
            )));
        }
        let player = team
            .player_mut(number)
            .ok_or_else(|| player_not_found(side, number))?;
        *player = input.into();
        Ok(())
    })
    .await
}

/// Remove a player from a team roster.
pub async fn delete_player(
    state: &SharedState,
    side: TeamSide,
    number: u8,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        let team = doc.team_mut(side);
        let before = team.players.len();
        team.players.retain(|p| p.number != number);
        if team.players.len() == before {
            return Err(player_not_found(side, number));
        }
        Ok(())
    })
    .await
}

/// Record a goal for a player. Does not touch the team score, which the
/// operator sets explicitly.
pub async fn add_goal(
    state: &SharedState,
    side: TeamSide,
    number: u8,
    request: AddGoalRequest,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        let player = doc
            .team_mut(side)
            .player_mut(number)
            .ok_or_else(|| player_not_found(side, number))?;
        player.goals.push(request.into());
        Ok(())
    })
    .await
}

/// Record a yellow or red card for a player.
pub async fn add_card(
    state: &SharedState,
    side: TeamSide,
    number: u8,
    request: AddCardRequest,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        let player = doc
            .team_mut(side)
            .player_mut(number)
            .ok_or_else(|| player_not_found(side, number))?;
        match request.kind {
            CardKind::Yellow => player.yellow_cards.push(request.minute),
            CardKind::Red => player.red_cards.push(request.minute),
        }
        Ok(())
    })
    .await
}

/// Flip whether a player is on the field.
pub async fn toggle_on_field(
    state: &SharedState,
    side: TeamSide,
    number: u8,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        let player = doc
            .team_mut(side)
            .player_mut(number)
            .ok_or_else(|| player_not_found(side, number))?;
        player.on_field = !player.on_field;
        Ok(())
    })
    .await
}

/// Clear goals and cards for every player on one team.
pub async fn reset_stats(
    state: &SharedState,
    side: TeamSide,
) -> Result<MatchDocument, ServiceError> {
    mutate(state, |doc| {
        for player in &mut doc.team_mut(side).players {
            player.reset_stats();
        }
        Ok(())
    })
    .await
}

/// Replace the whole match document. The route validates the payload first.
pub async fn import_document(state: &SharedState, document: MatchDocument) -> MatchDocument {
    state.store().match_doc().replace(document.clone()).await;
    ws_events::broadcast_config(state, document.clone());
    document
}

/// Apply a mutation under the document lock, persist, broadcast, and return
/// the updated document. The closure must not mutate on its error path.
async fn mutate<F>(state: &SharedState, mutation: F) -> Result<MatchDocument, ServiceError>
where
    F: FnOnce(&mut MatchDocument) -> Result<(), ServiceError>,
{
    let document = state
        .store()
        .match_doc()
        .update(|doc| {
            mutation(doc)?;
            Ok(doc.clone())
        })
        .await?;
    ws_events::broadcast_config(state, document.clone());
    Ok(document)
}

fn apply_team_patch(team: &mut TeamConfig, patch: TeamInfoPatch) {
    if let Some(name) = patch.name {
        team.name = name;
    }
    if let Some(abbreviation) = patch.abbreviation {
        team.abbreviation = abbreviation;
    }
}

fn player_not_found(side: TeamSide, number: u8) -> ServiceError {
    ServiceError::NotFound(format!("player {} not found on {}", number, side.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppState;

    async fn test_state() -> SharedState {
        let dir = std::env::temp_dir().join(format!("pitchside-match-{}", uuid::Uuid::new_v4()));
        AppState::new(&dir).await
    }

    fn upsert(number: u8, name: &str) -> PlayerUpsert {
        PlayerUpsert {
            number,
            name: name.into(),
            goals: Vec::new(),
            yellow_cards: Vec::new(),
            red_cards: Vec::new(),
            on_field: false,
        }
    }

    #[tokio::test]
    async fn set_score_clamps_negative() {
        let state = test_state().await;
        let doc = set_score(
            &state,
            SetScoreRequest {
                team: TeamSide::TeamA,
                score: -2,
            },
        )
        .await
        .unwrap();
        assert_eq!(doc.team_a.score, 0);
    }

    #[tokio::test]
    async fn duplicate_player_number_rejected_without_mutation() {
        let state = test_state().await;
        add_player(&state, TeamSide::TeamA, upsert(9, "First")).await.unwrap();

        let err = add_player(&state, TeamSide::TeamA, upsert(9, "Second"))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));

        let doc = full_document(&state).await;
        assert_eq!(doc.team_a.players.len(), 1);
        assert_eq!(doc.team_a.players[0].name, "First");
    }

    #[tokio::test]
    async fn same_number_allowed_on_other_team() {
        let state = test_state().await;
        add_player(&state, TeamSide::TeamA, upsert(9, "Home Nine")).await.unwrap();
        add_player(&state, TeamSide::TeamB, upsert(9, "Away Nine")).await.unwrap();

        let doc = full_document(&state).await;
        assert_eq!(doc.team_a.players.len(), 1);
        assert_eq!(doc.team_b.players.len(), 1);
    }

    #[tokio::test]
    async fn edit_player_can_change_number_to_free_slot() {
        let state = test_state().await;
        add_player(&state, TeamSide::TeamA, upsert(9, "Nine")).await.unwrap();

        let doc = edit_player(&state, TeamSide::TeamA, 9, upsert(10, "Nine"))
            .await
            .unwrap();
        assert!(doc.team_a.player(9).is_none());
        assert_eq!(doc.team_a.player(10).unwrap().name, "Nine");
    }

    #[tokio::test]
    async fn goal_for_unknown_player_is_not_found() {
        let state = test_state().await;
        let err = add_goal(
            &state,
            TeamSide::TeamB,
            77,
            AddGoalRequest {
                reg_minute: 12,
                add_minute: 0,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn cards_land_in_the_right_list() {
        let state = test_state().await;
        add_player(&state, TeamSide::TeamA, upsert(4, "Defender")).await.unwrap();

        add_card(
            &state,
            TeamSide::TeamA,
            4,
            AddCardRequest {
                kind: CardKind::Yellow,
                minute: 30,
            },
        )
        .await
        .unwrap();
        let doc = add_card(
            &state,
            TeamSide::TeamA,
            4,
            AddCardRequest {
                kind: CardKind::Red,
                minute: 60,
            },
        )
        .await
        .unwrap();

        let player = doc.team_a.player(4).unwrap();
        assert_eq!(player.yellow_cards, vec![30]);
        assert_eq!(player.red_cards, vec![60]);
    }

    #[tokio::test]
    async fn reset_stats_clears_goals_and_cards_but_keeps_roster() {
        let state = test_state().await;
        add_player(&state, TeamSide::TeamA, upsert(7, "Winger")).await.unwrap();
        add_goal(
            &state,
            TeamSide::TeamA,
            7,
            AddGoalRequest {
                reg_minute: 21,
                add_minute: 0,
            },
        )
        .await
        .unwrap();

        let doc = reset_stats(&state, TeamSide::TeamA).await.unwrap();
        let player = doc.team_a.player(7).unwrap();
        assert!(player.goals.is_empty());
        assert_eq!(player.name, "Winger");
    }

    #[tokio::test]
    async fn toggle_on_field_round_trips() {
        let state = test_state().await;
        add_player(&state, TeamSide::TeamB, upsert(1, "Keeper")).await.unwrap();

        let doc = toggle_on_field(&state, TeamSide::TeamB, 1).await.unwrap();
        assert!(doc.team_b.player(1).unwrap().on_field);
        let doc = toggle_on_field(&state, TeamSide::TeamB, 1).await.unwrap();
        assert!(!doc.team_b.player(1).unwrap().on_field);
    }
}
