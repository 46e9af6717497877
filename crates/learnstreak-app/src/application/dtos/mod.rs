mod streak_dto;

pub use streak_dto::{
    MilestoneDto, RecordActivityResultDto, StreakDataDto, StreakLeaderboardEntryDto,
    StreakResponseDto,
};
