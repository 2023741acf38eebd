use crate::models::user::User;
use leptos::*;

#[component]
pub fn UsersTable(users: Vec<User>) -> impl IntoView {
    let empty = users.is_empty();

    view! {
        <div class="users bg-card rounded-xl shadow-sm overflow-hidden">
            <div class="p-4 md:p-6 border-b border-border">
                <h3 class="font-display text-xl">"Registered Users"</h3>
            </div>
            <div class="overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-secondary">
                        <tr>
                            <th>"Name"</th>
                            <th>"Username"</th>
                            <th class="hidden md:table-cell">"Email"</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        {users
                            .into_iter()
                            .map(|user| {
                                view! {
                                    <tr class="user-row">
                                        <td>{user.full_name}</td>
                                        <td>{user.username}</td>
                                        <td class="hidden md:table-cell">{user.email}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                        {empty
                            .then(|| {
                                view! {
                                    <tr>
                                        <td colspan="3" class="empty px-6 py-8 text-center text-muted-foreground">
                                            "No users yet"
                                        </td>
                                    </tr>
                                }
                            })}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
