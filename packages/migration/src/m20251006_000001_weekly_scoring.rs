use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Expr, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Tournaments {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
enum WeeklyScorecards {
    Table,
    Id,
    PlayerId,
    TournamentId,
    WeekStartDate,
    HoleScores,
    TotalScore,
    IsLive,
    GroupTag,
    SubmittedAt,
    CreatedAt,
}

#[derive(Iden)]
enum WeeklyMatches {
    Table,
    Id,
    TournamentId,
    WeekStartDate,
    Player1Id,
    Player2Id,
    Player1ScorecardId,
    Player2ScorecardId,
    HolePointsPlayer1,
    HolePointsPlayer2,
    Round1PointsPlayer1,
    Round1PointsPlayer2,
    Round2PointsPlayer1,
    Round2PointsPlayer2,
    Round3PointsPlayer1,
    Round3PointsPlayer2,
    MatchWinnerId,
    MatchLiveBonusPlayer1,
    MatchLiveBonusPlayer2,
    TotalPointsPlayer1,
    TotalPointsPlayer2,
    CreatedAt,
}

#[derive(Iden)]
enum WeeklyLeaderboards {
    Table,
    Id,
    TournamentId,
    WeekStartDate,
    PlayerId,
    TotalHolePoints,
    TotalRoundPoints,
    TotalMatchBonus,
    TotalScore,
    MatchesPlayed,
    MatchesWon,
    MatchesTied,
    MatchesLost,
    LiveMatchesPlayed,
    CreatedAt,
}

fn points_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).double().not_null().default(0.0).to_owned()
}

fn counter_col<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col).integer().not_null().default(0).to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // tournaments
        manager
            .create_table(
                Table::create()
                    .table(Tournaments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tournaments::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Tournaments::Name).string().not_null())
                    .col(
                        ColumnDef::new(Tournaments::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // weekly_scorecards
        manager
            .create_table(
                Table::create()
                    .table(WeeklyScorecards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyScorecards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(WeeklyScorecards::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyScorecards::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyScorecards::WeekStartDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WeeklyScorecards::HoleScores).json().not_null())
                    .col(
                        ColumnDef::new(WeeklyScorecards::TotalScore)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(WeeklyScorecards::IsLive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(WeeklyScorecards::GroupTag).string().null())
                    .col(
                        ColumnDef::new(WeeklyScorecards::SubmittedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyScorecards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_scorecards_tournament_id")
                            .from(WeeklyScorecards::Table, WeeklyScorecards::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One logical scorecard per (player, tournament, week)
        manager
            .create_index(
                Index::create()
                    .name("ux_weekly_scorecards_player_week")
                    .table(WeeklyScorecards::Table)
                    .col(WeeklyScorecards::PlayerId)
                    .col(WeeklyScorecards::TournamentId)
                    .col(WeeklyScorecards::WeekStartDate)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_weekly_scorecards_tournament_week")
                    .table(WeeklyScorecards::Table)
                    .col(WeeklyScorecards::TournamentId)
                    .col(WeeklyScorecards::WeekStartDate)
                    .to_owned(),
            )
            .await?;

        // weekly_matches
        manager
            .create_table(
                Table::create()
                    .table(WeeklyMatches::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyMatches::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(WeeklyMatches::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyMatches::WeekStartDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyMatches::Player1Id)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyMatches::Player2Id)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyMatches::Player1ScorecardId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyMatches::Player2ScorecardId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(points_col(WeeklyMatches::HolePointsPlayer1))
                    .col(points_col(WeeklyMatches::HolePointsPlayer2))
                    .col(points_col(WeeklyMatches::Round1PointsPlayer1))
                    .col(points_col(WeeklyMatches::Round1PointsPlayer2))
                    .col(points_col(WeeklyMatches::Round2PointsPlayer1))
                    .col(points_col(WeeklyMatches::Round2PointsPlayer2))
                    .col(points_col(WeeklyMatches::Round3PointsPlayer1))
                    .col(points_col(WeeklyMatches::Round3PointsPlayer2))
                    .col(
                        ColumnDef::new(WeeklyMatches::MatchWinnerId)
                            .big_integer()
                            .null(),
                    )
                    .col(points_col(WeeklyMatches::MatchLiveBonusPlayer1))
                    .col(points_col(WeeklyMatches::MatchLiveBonusPlayer2))
                    .col(points_col(WeeklyMatches::TotalPointsPlayer1))
                    .col(points_col(WeeklyMatches::TotalPointsPlayer2))
                    .col(
                        ColumnDef::new(WeeklyMatches::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    // Canonical pair: lesser player id is always player1
                    .check(
                        Expr::col(WeeklyMatches::Player1Id)
                            .lt(Expr::col(WeeklyMatches::Player2Id)),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_matches_tournament_id")
                            .from(WeeklyMatches::Table, WeeklyMatches::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_matches_player1_scorecard_id")
                            .from(WeeklyMatches::Table, WeeklyMatches::Player1ScorecardId)
                            .to(WeeklyScorecards::Table, WeeklyScorecards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_matches_player2_scorecard_id")
                            .from(WeeklyMatches::Table, WeeklyMatches::Player2ScorecardId)
                            .to(WeeklyScorecards::Table, WeeklyScorecards::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Upsert key for match recomputation
        manager
            .create_index(
                Index::create()
                    .name("ux_weekly_matches_pair")
                    .table(WeeklyMatches::Table)
                    .col(WeeklyMatches::TournamentId)
                    .col(WeeklyMatches::WeekStartDate)
                    .col(WeeklyMatches::Player1Id)
                    .col(WeeklyMatches::Player2Id)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // weekly_leaderboards
        manager
            .create_table(
                Table::create()
                    .table(WeeklyLeaderboards::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WeeklyLeaderboards::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(WeeklyLeaderboards::TournamentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyLeaderboards::WeekStartDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WeeklyLeaderboards::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(points_col(WeeklyLeaderboards::TotalHolePoints))
                    .col(points_col(WeeklyLeaderboards::TotalRoundPoints))
                    .col(points_col(WeeklyLeaderboards::TotalMatchBonus))
                    .col(points_col(WeeklyLeaderboards::TotalScore))
                    .col(counter_col(WeeklyLeaderboards::MatchesPlayed))
                    .col(counter_col(WeeklyLeaderboards::MatchesWon))
                    .col(counter_col(WeeklyLeaderboards::MatchesTied))
                    .col(counter_col(WeeklyLeaderboards::MatchesLost))
                    .col(counter_col(WeeklyLeaderboards::LiveMatchesPlayed))
                    .col(
                        ColumnDef::new(WeeklyLeaderboards::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_weekly_leaderboards_tournament_id")
                            .from(WeeklyLeaderboards::Table, WeeklyLeaderboards::TournamentId)
                            .to(Tournaments::Table, Tournaments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_weekly_leaderboards_player")
                    .table(WeeklyLeaderboards::Table)
                    .col(WeeklyLeaderboards::TournamentId)
                    .col(WeeklyLeaderboards::WeekStartDate)
                    .col(WeeklyLeaderboards::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_weekly_leaderboards_ranking")
                    .table(WeeklyLeaderboards::Table)
                    .col(WeeklyLeaderboards::TournamentId)
                    .col(WeeklyLeaderboards::WeekStartDate)
                    .col(WeeklyLeaderboards::TotalScore)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_weekly_leaderboards_ranking")
                    .table(WeeklyLeaderboards::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ux_weekly_leaderboards_player")
                    .table(WeeklyLeaderboards::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(WeeklyLeaderboards::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_weekly_matches_pair")
                    .table(WeeklyMatches::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(WeeklyMatches::Table).to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ix_weekly_scorecards_tournament_week")
                    .table(WeeklyScorecards::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("ux_weekly_scorecards_player_week")
                    .table(WeeklyScorecards::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(WeeklyScorecards::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tournaments::Table).to_owned())
            .await?;

        Ok(())
    }
}
