use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/forgot-password")]
    ForgotPassword,
    #[at("/reset-password")]
    ResetPassword,
    #[at("/")]
    Home,
    #[at("/news")]
    News,
    #[at("/news/:id")]
    NewsDetail { id: i64 },
    #[at("/fixtures")]
    Fixtures,
    #[at("/matches")]
    Matches,
    #[at("/matches/:id")]
    MatchDetail { id: i64 },
    #[at("/standings")]
    Standings,
    #[at("/events")]
    Events,
    #[at("/events/:id")]
    EventDetail { id: i64 },
    #[at("/profile")]
    Profile,
    #[at("/account")]
    Account,
    #[at("/member-card")]
    MemberCard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Routes reachable without a session; everything else sits behind the
    /// gated dashboard layout.
    #[must_use]
    pub fn is_public(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::ForgotPassword | Route::ResetPassword
        )
    }

    /// Routes a session without membership must not reach.
    #[must_use]
    pub fn is_member_only(&self) -> bool {
        matches!(self, Route::MemberCard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_screens_are_public() {
        assert!(Route::Login.is_public());
        assert!(Route::ResetPassword.is_public());
        assert!(!Route::Home.is_public());
        assert!(!Route::MemberCard.is_public());
    }

    #[test]
    fn member_card_is_the_member_only_route() {
        assert!(Route::MemberCard.is_member_only());
        assert!(!Route::Profile.is_member_only());
    }
}
