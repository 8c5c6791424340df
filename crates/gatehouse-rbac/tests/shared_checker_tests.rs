//! Permission checkers shared across concurrent tasks.

use std::sync::Arc;

use gatehouse_rbac::{
    Action, PermissionChecker, PermissionError, PermissionMode, PermissionProfile,
};
use gatehouse_roles::Role;

/// Decision derived from the admin rule and the profile table alone.
fn expected(mode: PermissionMode, role: &Role, action: Action) -> Result<(), PermissionError> {
    let profile = match mode {
        PermissionMode::AllowAll => return Ok(()),
        PermissionMode::Standard => PermissionProfile::standard(),
        PermissionMode::Hangout => PermissionProfile::hangout(),
    };

    if role.is_admin() || profile.is_granted(role, action) {
        Ok(())
    } else if profile.contains_role(role) {
        Err(PermissionError::ActionNotGranted {
            role: role.clone(),
            action: action.as_str().to_string(),
        })
    } else {
        Err(PermissionError::RoleNotAllowed {
            role: role.clone(),
            action: action.as_str().to_string(),
        })
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_checker_shared_across_tasks() {
    // Allowed (role, action) pairs over the built-in roles: admin's 46 plus
    // the grant table entries.
    for (mode, allowed_pairs) in [
        (PermissionMode::Standard, 46 + 25),
        (PermissionMode::Hangout, 46 + 21),
        (PermissionMode::AllowAll, 8 * 46),
    ] {
        let checker: Arc<dyn PermissionChecker> = mode.checker();
        let mut handles = Vec::new();

        for role in Role::builtin() {
            for &action in Action::all() {
                let checker = Arc::clone(&checker);
                let role = role.clone();
                handles.push(tokio::spawn(async move {
                    let result = checker.authorize(&role, action);
                    (role, action, result)
                }));
            }
        }

        let mut allowed = 0;
        for handle in handles {
            let (role, action, result) = handle.await.unwrap();
            assert_eq!(result, expected(mode, &role, action), "{mode} {role} {action}");
            if result.is_ok() {
                allowed += 1;
            }
        }
        assert_eq!(allowed, allowed_pairs, "{mode}");
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_scenarios_under_concurrency() {
    let standard = PermissionMode::Standard.checker();
    let hangout = PermissionMode::Hangout.checker();

    let tasks = (0..32).map(|_| {
        let standard = Arc::clone(&standard);
        let hangout = Arc::clone(&hangout);
        tokio::spawn(async move {
            assert!(standard.authorize(&Role::USER, Action::SignIn).is_ok());
            assert!(matches!(
                standard.authorize(&Role::USER, Action::UpsertCertAuthority),
                Err(PermissionError::ActionNotGranted { .. })
            ));
            assert!(matches!(
                standard.has_permission(&Role::new("unregistered-role"), "SignIn"),
                Err(PermissionError::RoleNotAllowed { .. })
            ));
            assert!(hangout.authorize(&Role::USER, Action::SignIn).is_err());
            assert!(hangout.authorize(&Role::USER, Action::GenerateUserCert).is_ok());
            assert!(hangout.authorize(&Role::NODE, Action::UpsertCertAuthority).is_ok());
            assert!(standard.authorize(&Role::NODE, Action::UpsertCertAuthority).is_err());
            assert!(standard.has_permission(&Role::ADMIN, "DeleteUser").is_ok());
            assert!(hangout.has_permission(&Role::ADMIN, "AnythingAtAll").is_ok());
        })
    });

    for task in tasks.collect::<Vec<_>>() {
        task.await.unwrap();
    }
}

#[test]
fn test_checkers_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<gatehouse_rbac::ProfilePermissions>();
    assert_send_sync::<gatehouse_rbac::AllowAllPermissions>();
    assert_send_sync::<Arc<dyn PermissionChecker>>();
}
