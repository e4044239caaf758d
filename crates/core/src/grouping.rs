use serde::Serialize;

use crate::domain::Employee;

/// The members of a single job function, in collection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobGroup {
    pub job_function: String,
    pub members: Vec<Employee>,
}

/// Groups records by job function.
/// Groups appear in order of first appearance; members keep collection order.
pub fn group_by_job_function(records: &[Employee]) -> Vec<JobGroup> {
    let mut groups: Vec<JobGroup> = Vec::new();

    for record in records {
        match groups
            .iter_mut()
            .find(|g| g.job_function == record.job_function)
        {
            Some(group) => group.members.push(record.clone()),
            None => groups.push(JobGroup {
                job_function: record.job_function.clone(),
                members: vec![record.clone()],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;

    #[test]
    fn test_groups_in_first_appearance_order() {
        let groups = group_by_job_function(&seed_records());
        let labels: Vec<&str> = groups.iter().map(|g| g.job_function.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Operador",
                "Coordenador",
                "Diretor",
                "Recepcionista",
                "Contador",
                "Gerente",
                "Eletricista"
            ]
        );
    }

    #[test]
    fn test_members_keep_collection_order() {
        let groups = group_by_job_function(&seed_records());
        let operators: Vec<&str> = groups[0].members.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(operators, vec!["Maria", "João", "Heitor"]);
    }

    #[test]
    fn test_every_record_in_exactly_one_group() {
        let records = seed_records();
        let groups = group_by_job_function(&records);
        let total: usize = groups.iter().map(|g| g.members.len()).sum();
        assert_eq!(total, records.len());

        for record in &records {
            let hits: Vec<&JobGroup> = groups
                .iter()
                .filter(|g| g.members.iter().any(|m| m.id == record.id))
                .collect();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].job_function, record.job_function);
        }
    }

    #[test]
    fn test_empty_collection_has_no_groups() {
        assert!(group_by_job_function(&[]).is_empty());
    }
}
