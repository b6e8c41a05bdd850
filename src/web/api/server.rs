use crate::database::DbPool;
use crate::notification::bulk::BulkEmailConfig;
use crate::notification::service::EmailService;
use crate::web::api::{
    auth_controller, budget_controller, club_controller, comite_controller, commission_controller,
    cotisation_controller, email_cotisation_controller, gala_controller, gala_invites_controller,
    gala_table_controller, gala_tombola_controller, invite_reunion_controller, liste_presence_controller,
    mandat_controller, membres_commission_controller, reunion_controller, rubrique_budget_controller,
    rubrique_budget_realise_controller, transitions_controller,
};
use crate::web::error::default_catcher;
use crate::web::server::Server;
use crate::web::session_storage::SessionStorage;
use rocket::{Build, Rocket};
use std::sync::{Arc, Mutex};
use tera::Tera;

pub struct ApiServer {
    pool: DbPool,
    email_service: Arc<dyn EmailService>,
    bulk_email_config: BulkEmailConfig,
    renderer: Tera,
}

impl ApiServer {
    pub fn new(
        pool: DbPool,
        email_service: Arc<dyn EmailService>,
        bulk_email_config: BulkEmailConfig,
        renderer: Tera,
    ) -> Self {
        Self {
            pool,
            email_service,
            bulk_email_config,
            renderer,
        }
    }
}

impl Server for ApiServer {
    fn configure(&self, rocket_build: Rocket<Build>) -> Rocket<Build> {
        rocket_build
            .manage(self.pool.clone())
            .manage(Mutex::new(SessionStorage::default()))
            .manage(self.email_service.clone())
            .manage(self.bulk_email_config)
            .manage(self.renderer.clone())
            .mount(
                "/api/",
                routes![
                    auth_controller::register,
                    auth_controller::login,
                    auth_controller::logout,
                    auth_controller::me,
                    auth_controller::change_password,
                    club_controller::create_club,
                    club_controller::get_clubs,
                    club_controller::get_club,
                    club_controller::get_members,
                    club_controller::add_member,
                    club_controller::update_member_role,
                    club_controller::remove_member,
                    mandat_controller::get_mandats,
                    mandat_controller::create_mandat,
                    mandat_controller::activate_mandat,
                    transitions_controller::transition,
                    comite_controller::get_postes,
                    comite_controller::create_poste,
                    comite_controller::get_comite,
                    comite_controller::nominate,
                    comite_controller::remove_membre_comite,
                    cotisation_controller::get_cotisations,
                    cotisation_controller::create_cotisation,
                    cotisation_controller::create_cotisations_in_bulk,
                    cotisation_controller::update_cotisation,
                    cotisation_controller::delete_cotisation,
                    cotisation_controller::add_paiement,
                    cotisation_controller::delete_paiement,
                    cotisation_controller::get_situation,
                    email_cotisation_controller::send_situation,
                    email_cotisation_controller::send_situations,
                    commission_controller::get_commissions,
                    commission_controller::create_commission,
                    commission_controller::update_commission,
                    commission_controller::delete_commission,
                    membres_commission_controller::get_membres,
                    membres_commission_controller::add_membre,
                    membres_commission_controller::set_responsable,
                    membres_commission_controller::remove_membre,
                    reunion_controller::get_reunions,
                    reunion_controller::create_reunion,
                    reunion_controller::get_reunion,
                    reunion_controller::update_reunion,
                    reunion_controller::delete_reunion,
                    reunion_controller::get_compte_rendu,
                    reunion_controller::add_ordre_du_jour,
                    reunion_controller::delete_ordre_du_jour,
                    liste_presence_controller::get_presences,
                    liste_presence_controller::save_presences,
                    invite_reunion_controller::get_invites,
                    invite_reunion_controller::add_invite,
                    invite_reunion_controller::delete_invite,
                    gala_controller::get_galas,
                    gala_controller::create_gala,
                    gala_controller::get_gala,
                    gala_controller::update_gala,
                    gala_controller::delete_gala,
                    gala_controller::get_summary,
                    gala_invites_controller::get_invites,
                    gala_invites_controller::add_invite,
                    gala_invites_controller::import_invites,
                    gala_invites_controller::delete_invite,
                    gala_table_controller::get_tables,
                    gala_table_controller::create_table,
                    gala_table_controller::delete_table,
                    gala_table_controller::seat_invite,
                    gala_table_controller::delete_affectation,
                    gala_tombola_controller::get_tickets,
                    gala_tombola_controller::sell_tickets,
                    gala_tombola_controller::delete_ticket,
                    gala_tombola_controller::get_tombola_entries,
                    gala_tombola_controller::add_tombola_entry,
                    gala_tombola_controller::delete_tombola_entry,
                    gala_tombola_controller::draw,
                    budget_controller::get_types,
                    budget_controller::get_categories,
                    budget_controller::create_category,
                    budget_controller::create_sous_category,
                    budget_controller::get_summary,
                    rubrique_budget_controller::get_rubriques,
                    rubrique_budget_controller::create_rubrique,
                    rubrique_budget_controller::update_rubrique,
                    rubrique_budget_controller::delete_rubrique,
                    rubrique_budget_realise_controller::get_realisations,
                    rubrique_budget_realise_controller::add_realisation,
                    rubrique_budget_realise_controller::delete_realisation,
                ],
            )
            .register("/", catchers![default_catcher])
    }
}
