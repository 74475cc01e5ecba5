//! View state of the clan-rank page
//!
//! One owner (the page controller), mutated by exactly two paths: the
//! initialization callback and the resize handler. The resize handler
//! only ever touches `frame_height`.

use clanboard_api::{GameServer, GroupData, MenuEntry};

/// Height of the fixed menu bar above the embedded frame, in CSS pixels
pub const MENU_BAR_HEIGHT: i32 = 65;

/// Frame height that fills the viewport below the menu bar.
/// No clamping; tiny viewports yield zero or negative heights.
pub const fn frame_height(viewport_height: i32) -> i32 {
    viewport_height - MENU_BAR_HEIGHT
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub active_entry: MenuEntry,
    pub game_server: String,
    pub rank_url: String,
    pub frame_height: i32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_entry: MenuEntry::ClanRank,
            game_server: "cn".to_string(),
            rank_url: String::new(),
            frame_height: 800,
        }
    }
}

impl ViewState {
    /// Store the backend-reported region code verbatim; does not resolve
    pub fn set_game_server(&mut self, code: &str) {
        code.clone_into(&mut self.game_server);
    }

    /// Map the stored region code to its ranking site.
    /// Unrecognized codes leave the previous URL in place.
    pub fn resolve_rank_url(&mut self) {
        if let Some(server) = GameServer::parse(&self.game_server) {
            self.rank_url = server.rank_url().to_string();
        }
    }

    /// Success arm of initialization
    pub fn apply_group_data(&mut self, data: &GroupData) {
        self.set_game_server(&data.game_server);
        self.resolve_rank_url();
    }

    /// Resize arm: track the live viewport height
    pub fn apply_viewport_height(&mut self, viewport_height: i32) {
        self.frame_height = frame_height(viewport_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clanboard_api::{DashboardError, DashboardResponse};

    #[test]
    fn test_frame_height() {
        assert_eq!(frame_height(865), 800);
        assert_eq!(frame_height(65), 0);
        assert_eq!(frame_height(10), -55);
    }

    #[test]
    fn test_apply_viewport_height() {
        let mut state = ViewState::default();
        state.apply_viewport_height(1080);
        assert_eq!(state.frame_height, 1015);
    }

    #[test]
    fn test_resolve_known_regions() {
        let mut state = ViewState::default();
        state.set_game_server("cn");
        state.resolve_rank_url();
        assert_eq!(state.rank_url, "https://kyouka.kengxxiao.com/rank/clan");

        state.set_game_server("tw");
        state.resolve_rank_url();
        assert_eq!(state.rank_url, "https://rank.layvtwt.top/");
    }

    #[test]
    fn test_unknown_region_keeps_previous_url() {
        let mut state = ViewState::default();
        state.set_game_server("us");
        state.resolve_rank_url();
        assert_eq!(state.rank_url, "");

        // Still a no-op after a successful resolve
        state.set_game_server("cn");
        state.resolve_rank_url();
        let resolved = state.rank_url.clone();
        state.set_game_server("us");
        state.resolve_rank_url();
        assert_eq!(state.rank_url, resolved);
    }

    #[test]
    fn test_init_success_path() {
        let resp: DashboardResponse =
            serde_json::from_str(r#"{"code":0,"groupData":{"game_server":"cn"}}"#).unwrap();
        let mut state = ViewState::default();
        state.apply_group_data(&resp.into_result().unwrap());
        assert_eq!(state.game_server, "cn");
        assert_eq!(state.rank_url, "https://kyouka.kengxxiao.com/rank/clan");
    }

    #[test]
    fn test_init_error_path_leaves_state_unresolved() {
        let resp: DashboardResponse =
            serde_json::from_str(r#"{"code":1,"message":"boom"}"#).unwrap();
        let err = resp.into_result().unwrap_err();
        assert_eq!(err.to_string(), "boom");
        assert!(matches!(err, DashboardError::Api { .. }));

        // The controller shows the dialog and never touches the state
        let state = ViewState::default();
        assert_eq!(state.rank_url, "");
    }
}
