//! Shared request state.

use std::sync::Arc;

use sqlx::PgPool;

use crate::adapters::postgres::{
    PostgresClubRepository, PostgresEventRepository, PostgresMembershipRepository,
    PostgresPaymentRepository, PostgresRegistrationRepository, PostgresUserRepository,
};
use crate::application::handlers::{
    CancelRegistrationHandler, CheckoutUrls, ConfirmPaymentHandler, CreateCheckoutHandler,
    CreateClubHandler, CreateEventHandler, DeleteEventHandler, ExpireMembershipHandler,
    GetAdminOverviewHandler, GetClubHandler, GetEventHandler, GetManagerOverviewHandler,
    GetMemberOverviewHandler, JoinFreeClubHandler, ListClubMembersHandler, ListClubsHandler,
    ListEventRegistrationsHandler, ListEventsHandler, ListFeaturedClubsHandler,
    ListManagedClubsHandler, ListManagerEventsHandler, ListManagerPaymentsHandler,
    ListMembershipsPerClubHandler, ListMyClubsHandler, ListMyEventsHandler, ListPaymentsHandler,
    ListUsersHandler, RegisterForEventHandler, RegisterUserHandler, ResolveRoleHandler,
    SetClubStatusHandler, SetUserRoleHandler, UpdateClubHandler, UpdateEventHandler,
};
use crate::ports::{
    ClubRepository, EventRepository, MembershipRepository, PaymentGateway, PaymentRepository,
    RegistrationRepository, TokenVerifier, UserRepository,
};

/// Ports behind `Arc`s; cloned once per request. Handlers are built on
/// demand from these.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub clubs: Arc<dyn ClubRepository>,
    pub events: Arc<dyn EventRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub memberships: Arc<dyn MembershipRepository>,
    pub payments: Arc<dyn PaymentRepository>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub payment_gateway: Arc<dyn PaymentGateway>,
    pub checkout_urls: CheckoutUrls,
}

impl AppState {
    /// State over one store that implements every repository port.
    pub fn from_store<S>(
        store: Arc<S>,
        token_verifier: Arc<dyn TokenVerifier>,
        payment_gateway: Arc<dyn PaymentGateway>,
        checkout_urls: CheckoutUrls,
    ) -> Self
    where
        S: UserRepository
            + ClubRepository
            + EventRepository
            + RegistrationRepository
            + MembershipRepository
            + PaymentRepository
            + 'static,
    {
        Self {
            users: store.clone(),
            clubs: store.clone(),
            events: store.clone(),
            registrations: store.clone(),
            memberships: store.clone(),
            payments: store,
            token_verifier,
            payment_gateway,
            checkout_urls,
        }
    }

    /// State over the PostgreSQL repositories sharing one pool.
    pub fn postgres(
        pool: PgPool,
        token_verifier: Arc<dyn TokenVerifier>,
        payment_gateway: Arc<dyn PaymentGateway>,
        checkout_urls: CheckoutUrls,
    ) -> Self {
        Self {
            users: Arc::new(PostgresUserRepository::new(pool.clone())),
            clubs: Arc::new(PostgresClubRepository::new(pool.clone())),
            events: Arc::new(PostgresEventRepository::new(pool.clone())),
            registrations: Arc::new(PostgresRegistrationRepository::new(pool.clone())),
            memberships: Arc::new(PostgresMembershipRepository::new(pool.clone())),
            payments: Arc::new(PostgresPaymentRepository::new(pool)),
            token_verifier,
            payment_gateway,
            checkout_urls,
        }
    }

    // Access

    pub fn resolve_role_handler(&self) -> ResolveRoleHandler {
        ResolveRoleHandler::new(self.users.clone())
    }

    // Users

    pub fn list_users_handler(&self) -> ListUsersHandler {
        ListUsersHandler::new(self.users.clone())
    }

    pub fn register_user_handler(&self) -> RegisterUserHandler {
        RegisterUserHandler::new(self.users.clone())
    }

    pub fn set_user_role_handler(&self) -> SetUserRoleHandler {
        SetUserRoleHandler::new(self.users.clone())
    }

    // Clubs

    pub fn list_clubs_handler(&self) -> ListClubsHandler {
        ListClubsHandler::new(self.clubs.clone())
    }

    pub fn featured_clubs_handler(&self) -> ListFeaturedClubsHandler {
        ListFeaturedClubsHandler::new(self.clubs.clone())
    }

    pub fn managed_clubs_handler(&self) -> ListManagedClubsHandler {
        ListManagedClubsHandler::new(self.clubs.clone())
    }

    pub fn get_club_handler(&self) -> GetClubHandler {
        GetClubHandler::new(self.clubs.clone())
    }

    pub fn create_club_handler(&self) -> CreateClubHandler {
        CreateClubHandler::new(self.clubs.clone())
    }

    pub fn update_club_handler(&self) -> UpdateClubHandler {
        UpdateClubHandler::new(self.clubs.clone())
    }

    pub fn set_club_status_handler(&self) -> SetClubStatusHandler {
        SetClubStatusHandler::new(self.clubs.clone())
    }

    // Events

    pub fn list_events_handler(&self) -> ListEventsHandler {
        ListEventsHandler::new(self.events.clone())
    }

    pub fn get_event_handler(&self) -> GetEventHandler {
        GetEventHandler::new(self.events.clone())
    }

    pub fn create_event_handler(&self) -> CreateEventHandler {
        CreateEventHandler::new(self.clubs.clone(), self.events.clone())
    }

    pub fn update_event_handler(&self) -> UpdateEventHandler {
        UpdateEventHandler::new(self.events.clone())
    }

    pub fn delete_event_handler(&self) -> DeleteEventHandler {
        DeleteEventHandler::new(self.events.clone())
    }

    pub fn list_event_registrations_handler(&self) -> ListEventRegistrationsHandler {
        ListEventRegistrationsHandler::new(self.events.clone(), self.registrations.clone())
    }

    // Registrations and memberships

    pub fn register_for_event_handler(&self) -> RegisterForEventHandler {
        RegisterForEventHandler::new(self.events.clone(), self.registrations.clone())
    }

    pub fn cancel_registration_handler(&self) -> CancelRegistrationHandler {
        CancelRegistrationHandler::new(self.registrations.clone())
    }

    pub fn join_free_club_handler(&self) -> JoinFreeClubHandler {
        JoinFreeClubHandler::new(self.clubs.clone(), self.memberships.clone())
    }

    pub fn expire_membership_handler(&self) -> ExpireMembershipHandler {
        ExpireMembershipHandler::new(self.clubs.clone(), self.memberships.clone())
    }

    // Checkout

    pub fn list_payments_handler(&self) -> ListPaymentsHandler {
        ListPaymentsHandler::new(self.payments.clone())
    }

    pub fn create_checkout_handler(&self) -> CreateCheckoutHandler {
        CreateCheckoutHandler::new(
            self.clubs.clone(),
            self.events.clone(),
            self.memberships.clone(),
            self.registrations.clone(),
            self.payment_gateway.clone(),
            self.checkout_urls.clone(),
        )
    }

    pub fn confirm_payment_handler(&self) -> ConfirmPaymentHandler {
        ConfirmPaymentHandler::new(
            self.clubs.clone(),
            self.events.clone(),
            self.memberships.clone(),
            self.registrations.clone(),
            self.payments.clone(),
            self.payment_gateway.clone(),
        )
    }

    // Overviews

    pub fn admin_overview_handler(&self) -> GetAdminOverviewHandler {
        GetAdminOverviewHandler::new(
            self.users.clone(),
            self.clubs.clone(),
            self.events.clone(),
            self.memberships.clone(),
            self.payments.clone(),
        )
    }

    pub fn memberships_per_club_handler(&self) -> ListMembershipsPerClubHandler {
        ListMembershipsPerClubHandler::new(self.clubs.clone(), self.memberships.clone())
    }

    pub fn manager_overview_handler(&self) -> GetManagerOverviewHandler {
        GetManagerOverviewHandler::new(
            self.clubs.clone(),
            self.events.clone(),
            self.memberships.clone(),
            self.payments.clone(),
        )
    }

    pub fn club_members_handler(&self) -> ListClubMembersHandler {
        ListClubMembersHandler::new(self.clubs.clone(), self.memberships.clone())
    }

    pub fn manager_events_handler(&self) -> ListManagerEventsHandler {
        ListManagerEventsHandler::new(self.clubs.clone(), self.events.clone())
    }

    pub fn manager_payments_handler(&self) -> ListManagerPaymentsHandler {
        ListManagerPaymentsHandler::new(self.clubs.clone(), self.payments.clone())
    }

    pub fn member_overview_handler(&self) -> GetMemberOverviewHandler {
        GetMemberOverviewHandler::new(
            self.clubs.clone(),
            self.events.clone(),
            self.memberships.clone(),
            self.registrations.clone(),
            self.payments.clone(),
        )
    }

    pub fn my_events_handler(&self) -> ListMyEventsHandler {
        ListMyEventsHandler::new(self.clubs.clone(), self.events.clone(), self.registrations.clone())
    }

    pub fn my_clubs_handler(&self) -> ListMyClubsHandler {
        ListMyClubsHandler::new(self.clubs.clone(), self.memberships.clone())
    }
}
