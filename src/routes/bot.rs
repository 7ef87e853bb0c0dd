use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::backend::QuoteSubmitter;
use crate::forms::bot::AnswerForm;
use crate::models::visitor::Visitor;
use crate::routes::{base_context, redirect, render_template};
use crate::services::bot as bot_service;
use crate::state::QuoteConversation;
use crate::store::VisitorStore;

#[get("/bot")]
pub async fn show_bot(
    visitor: Visitor,
    store: web::Data<VisitorStore<QuoteConversation>>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = bot_service::load_bot_page(store.get_ref(), visitor.id());

    let mut context = base_context(&flash_messages, "bot");
    context.insert("page", &data);

    render_template(&tera, "bot/index.html", &context)
}

#[post("/bot/answer")]
pub async fn answer_bot(
    visitor: Visitor,
    store: web::Data<VisitorStore<QuoteConversation>>,
    submitter: web::Data<dyn QuoteSubmitter>,
    web::Form(form): web::Form<AnswerForm>,
) -> impl Responder {
    if let Err(err) =
        bot_service::answer(submitter.get_ref(), store.get_ref(), visitor.id(), form).await
    {
        FlashMessage::warning(err.to_string()).send();
    }
    redirect("/bot")
}

#[post("/bot/restart")]
pub async fn restart_bot(
    visitor: Visitor,
    store: web::Data<VisitorStore<QuoteConversation>>,
) -> impl Responder {
    bot_service::restart(store.get_ref(), visitor.id());
    redirect("/bot")
}
