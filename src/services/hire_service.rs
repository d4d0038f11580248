use crate::dto::hire_dto::{HireFreelancerReq, HireFreelancerResp};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::repos::profile_repo::ProfileRepo;
use crate::repos::user_repo::UserRepo;
use crate::services::email::EmailSender;
use crate::services::site_info::SiteInfoProvider;

#[derive(Clone)]
pub struct HireService<U, P, S, E> {
    users: U,
    profiles: P,
    site_info: S,
    email: E,
}

impl<U, P, S, E> HireService<U, P, S, E>
where
    U: UserRepo,
    P: ProfileRepo,
    S: SiteInfoProvider,
    E: EmailSender,
{
    pub fn new(users: U, profiles: P, site_info: S, email: E) -> Self {
        Self {
            users,
            profiles,
            site_info,
            email,
        }
    }

    /// Sends the hiring message to the freelancer's stated contact email,
    /// falling back to the account email. Delivery runs detached; once the
    /// lookups succeed the caller always gets a success acknowledgement.
    pub async fn hire_freelancer(&self, req: &HireFreelancerReq) -> Result<HireFreelancerResp> {
        let freelancer_user = self
            .users
            .get_by_id(req.freelancer_user_id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        let profile = self
            .profiles
            .get_by_user_id(req.freelancer_user_id)
            .await?
            .ok_or_else(|| Error::NotFound("Freelancer profile not found".to_string()))?;

        let current_user = self
            .users
            .get_by_id(req.login_user_id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

        let site = self.site_info.get_site_general().await?;

        let to = if !profile.contact_email.is_empty() {
            profile.contact_email.clone()
        } else {
            freelancer_user.email.clone()
        };

        let body = render_hiring_email(&req.message, &current_user, &freelancer_user, &site.name);
        let subject = req.subject.clone();
        let sender = self.email.clone();
        tokio::spawn(async move {
            if let Err(err) = sender.send(to, subject, body).await {
                tracing::warn!(error = ?err, "hiring email delivery failed");
            }
        });

        Ok(HireFreelancerResp {
            success: true,
            message: "Hiring message sent successfully".to_string(),
        })
    }
}

fn render_hiring_email(
    message: &str,
    current_user: &User,
    freelancer_user: &User,
    site_name: &str,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Job Opportunity from {site_name}</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
    <div style="max-width: 600px; margin: 0 auto; padding: 20px;">
        <h2 style="color: #2c3e50;">Job Opportunity from {site_name}</h2>

        <p>Hello {recipient},</p>

        <p>You have received a job opportunity from <strong>{sender}</strong> ({sender_username}) on {site_name}.</p>

        <div style="background-color: #f8f9fa; padding: 15px; border-left: 4px solid #007bff; margin: 20px 0;">
            <h3 style="margin-top: 0; color: #007bff;">Message:</h3>
            <p style="margin-bottom: 0;">{message}</p>
        </div>

        <p>You can contact them directly at: <a href="mailto:{sender_email}">{sender_email}</a></p>

        <p>Best regards,<br>The {site_name} Team</p>

        <hr style="border: none; border-top: 1px solid #eee; margin: 30px 0;">
        <p style="font-size: 12px; color: #666;">
            This message was sent through {site_name}. Please do not reply to this email directly.
        </p>
    </div>
</body>
</html>
"#,
        site_name = site_name,
        recipient = freelancer_user.display_name,
        sender = current_user.display_name,
        sender_username = current_user.username,
        sender_email = current_user.email,
        message = message,
    )
}
