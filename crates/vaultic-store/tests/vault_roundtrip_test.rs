//! End-to-end vault lifecycle: sign-in, CRUD across record kinds, export,
//! sign-out lockout.

use anyhow::Result;

use vaultic_core::{
    AuthEntryRepository, AuthMethod, CreateAuthEntry, CreateNote, CreatePasswordEntry,
    NoteRepository, PasswordEntry, PasswordEntryRepository, SessionEvent, UpdatePasswordEntry,
};
use vaultic_store::{Vault, VaultConfig};

fn entry_req(title: &str, password: &str) -> CreatePasswordEntry {
    CreatePasswordEntry {
        title: title.to_string(),
        username: "user@example.com".to_string(),
        password: password.to_string(),
        url: Some("https://example.com".to_string()),
        notes: None,
        category: Some("Work".to_string()),
        is_favorite: false,
    }
}

#[tokio::test]
async fn full_vault_lifecycle() -> Result<()> {
    let vault = Vault::open(VaultConfig::default());
    let mut events = vault.session().subscribe();

    // Locked vault rejects everything
    assert!(vault.entries.list().await.is_err());
    assert!(!vault.session().sign_in("wrong").await);
    assert!(vault.session().sign_in("password").await);

    // Password entry round trip
    let id = vault.entries.insert(entry_req("GitHub", "hunter2")).await?;
    let created = vault.entries.fetch(id).await?;
    assert_eq!(created.title, "GitHub");
    assert_eq!(created.category, "Work");

    vault
        .entries
        .update(
            id,
            UpdatePasswordEntry {
                password: Some("Tr0ub4dor&3Xyz".to_string()),
                ..Default::default()
            },
        )
        .await?;
    let updated = vault.entries.fetch(id).await?;
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.password, "Tr0ub4dor&3Xyz");
    assert!(updated.updated_at >= created.updated_at);

    // Notes and auth entries live in their own collections
    let note_id = vault
        .notes
        .insert(CreateNote {
            title: "Wifi".to_string(),
            content: "On the sticker".to_string(),
            category: Some("Personal".to_string()),
            is_favorite: false,
        })
        .await?;
    assert!(vault.notes.exists(note_id).await?);

    let auth_id = vault
        .auth
        .insert(CreateAuthEntry {
            title: "GitHub 2FA".to_string(),
            method: AuthMethod::BackupCodes {
                codes: vec!["111111".to_string()],
            },
            notes: None,
            category: Some("Work".to_string()),
            is_favorite: false,
        })
        .await?;
    assert!(vault.auth.exists(auth_id).await?);

    // Export reflects only password entries
    let doc = vault.export_passwords().await?;
    let exported: Vec<PasswordEntry> = serde_json::from_str(&doc)?;
    assert_eq!(exported.len(), 1);
    assert_eq!(exported[0].password, "Tr0ub4dor&3Xyz");

    // Sign-out locks the vault again; records survive for the next session
    vault.session().sign_out().await;
    assert!(vault.entries.fetch(id).await.is_err());
    assert!(vault.session().sign_in("password").await);
    assert_eq!(vault.entries.fetch(id).await?.title, "GitHub");

    // Subscribers saw the session changes in order
    assert!(matches!(events.recv().await?, SessionEvent::SignedIn { .. }));
    assert!(matches!(events.recv().await?, SessionEvent::SignedOut { .. }));
    assert!(matches!(events.recv().await?, SessionEvent::SignedIn { .. }));

    Ok(())
}

#[tokio::test]
async fn env_config_controls_the_passphrase() -> Result<()> {
    let vault = Vault::open(VaultConfig {
        master_passphrase: "correct horse battery staple".to_string(),
        ..VaultConfig::default()
    });
    assert!(!vault.session().sign_in("password").await);
    assert!(vault.session().sign_in("correct horse battery staple").await);
    assert!(vault.entries.list().await?.is_empty());
    Ok(())
}
