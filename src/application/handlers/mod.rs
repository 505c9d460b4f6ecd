//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations over the
//! repository and gateway ports. HTTP adapters call these; they never talk
//! to axum types.

pub mod access;
pub mod catalog;
pub mod checkout;
pub mod club;
pub mod event;
pub mod membership;
pub mod overview;
pub mod registration;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

pub use access::{
    authenticate, bearer_token, require_role, ResolveRoleHandler, FORBIDDEN_MESSAGE,
    UNAUTHORIZED_MESSAGE,
};
pub use catalog::{
    GetClubHandler, GetEventHandler, ListClubsHandler, ListEventsHandler, ListEventsQuery,
    ListFeaturedClubsHandler, ListManagedClubsHandler, ListPaymentsHandler, ListUsersHandler,
    FEATURED_CLUB_LIMIT,
};
pub use checkout::{
    CheckoutUrls, ConfirmPaymentCommand, ConfirmPaymentHandler, ConfirmPaymentResult,
    CreateCheckoutCommand, CreateCheckoutHandler,
};
pub use club::{
    CreateClubCommand, CreateClubHandler, SetClubStatusCommand, SetClubStatusHandler,
    UpdateClubCommand, UpdateClubHandler,
};
pub use event::{
    CreateEventCommand, CreateEventHandler, DeleteEventCommand, DeleteEventHandler,
    ListEventRegistrationsHandler, ListEventRegistrationsQuery, UpdateEventCommand,
    UpdateEventHandler,
};
pub use membership::{
    ExpireMembershipCommand, ExpireMembershipHandler, JoinFreeClubCommand, JoinFreeClubHandler,
};
pub use overview::{
    GetAdminOverviewHandler, GetManagerOverviewHandler, GetMemberOverviewHandler,
    GetMemberOverviewQuery, ListClubMembersHandler, ListManagerEventsHandler,
    ListManagerPaymentsHandler, ListMembershipsPerClubHandler, ListMyClubsHandler,
    ListMyEventsHandler,
};
pub use registration::{
    CancelRegistrationCommand, CancelRegistrationHandler, RegisterForEventCommand,
    RegisterForEventHandler,
};
pub use user::{
    RegisterUserCommand, RegisterUserHandler, RegisterUserResult, SetUserRoleCommand,
    SetUserRoleHandler,
};
