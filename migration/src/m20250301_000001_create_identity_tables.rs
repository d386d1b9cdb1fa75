use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建学生表
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Lrn)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Students::Fname).string().not_null())
                    .col(ColumnDef::new(Students::Mname).string().null())
                    .col(ColumnDef::new(Students::Lname).string().not_null())
                    .col(ColumnDef::new(Students::Suffix).string().null())
                    .col(ColumnDef::new(Students::Bdate).string().null())
                    .col(ColumnDef::new(Students::Bplace).string().null())
                    .col(ColumnDef::new(Students::Gender).string().null())
                    .col(ColumnDef::new(Students::Religion).string().null())
                    .col(ColumnDef::new(Students::Address).string().null())
                    .col(ColumnDef::new(Students::ContactNo).string().null())
                    .col(
                        ColumnDef::new(Students::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Students::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Students::StudentPic).string().null())
                    .col(ColumnDef::new(Students::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Students::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建管理员表
        manager
            .create_table(
                Table::create()
                    .table(Admins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Admins::AdminId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Admins::Fname).string().not_null())
                    .col(ColumnDef::new(Admins::Mname).string().null())
                    .col(ColumnDef::new(Admins::Lname).string().not_null())
                    .col(
                        ColumnDef::new(Admins::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Admins::PasswordHash).string().not_null())
                    .col(ColumnDef::new(Admins::AdminPic).string().null())
                    .col(ColumnDef::new(Admins::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Admins::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建报名表
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::EnrolId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Enrollments::Lrn).string().not_null())
                    .col(ColumnDef::new(Enrollments::GradeLevel).string().not_null())
                    .col(ColumnDef::new(Enrollments::GuardianName).string().not_null())
                    .col(ColumnDef::new(Enrollments::GuardianNo).string().null())
                    .col(ColumnDef::new(Enrollments::LastAttended).string().not_null())
                    .col(ColumnDef::new(Enrollments::PublicPrivate).string().not_null())
                    .col(ColumnDef::new(Enrollments::Strand).string().null())
                    .col(ColumnDef::new(Enrollments::SchoolYear).string().not_null())
                    .col(ColumnDef::new(Enrollments::DateRegister).big_integer().null())
                    .col(
                        ColumnDef::new(Enrollments::RegapprovalDate)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::PaymentApproval)
                            .big_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(Enrollments::SectionId).big_integer().null())
                    .col(ColumnDef::new(Enrollments::OldAccount).double().null())
                    .col(
                        ColumnDef::new(Enrollments::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Enrollments::Table, Enrollments::Lrn)
                            .to(Students::Table, Students::Lrn)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建缴费表（只追加）
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::PaymentId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Payments::Lrn).string().not_null())
                    .col(
                        ColumnDef::new(Payments::OrNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Payments::AmountPaid).double().not_null())
                    .col(ColumnDef::new(Payments::ProofPayment).string().not_null())
                    .col(ColumnDef::new(Payments::Description).string().not_null())
                    .col(ColumnDef::new(Payments::DateOfPayment).string().not_null())
                    .col(ColumnDef::new(Payments::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Payments::Table, Payments::Lrn)
                            .to(Students::Table, Students::Lrn)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建财务报表文件表
        manager
            .create_table(
                Table::create()
                    .table(FinancialStatements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FinancialStatements::SoaId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FinancialStatements::Lrn).string().not_null())
                    .col(
                        ColumnDef::new(FinancialStatements::Filename)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialStatements::DateUploaded)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialStatements::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialStatements::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(FinancialStatements::Table, FinancialStatements::Lrn)
                            .to(Students::Table, Students::Lrn)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建学费表
        manager
            .create_table(
                Table::create()
                    .table(TuitionFees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TuitionFees::FeeId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TuitionFees::GradeLevel)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(TuitionFees::Tuition).double().not_null())
                    .col(ColumnDef::new(TuitionFees::General).double().null())
                    .col(ColumnDef::new(TuitionFees::Esc).double().null())
                    .col(ColumnDef::new(TuitionFees::Subsidy).double().null())
                    .col(ColumnDef::new(TuitionFees::ReqDownpayment).double().null())
                    .col(
                        ColumnDef::new(TuitionFees::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TuitionFees::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建消息表（发送者与接收者可能是学生或管理员，不设外键）
        manager
            .create_table(
                Table::create()
                    .table(Messages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Messages::MessageId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Messages::MessageSender).string().not_null())
                    .col(ColumnDef::new(Messages::MessageReceiver).string().not_null())
                    .col(ColumnDef::new(Messages::Message).text().not_null())
                    .col(ColumnDef::new(Messages::MessageDate).string().not_null())
                    .col(ColumnDef::new(Messages::ReadAt).big_integer().null())
                    .col(ColumnDef::new(Messages::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Messages::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_lrn")
                    .table(Enrollments::Table)
                    .col(Enrollments::Lrn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_enrollments_lrn_school_year")
                    .table(Enrollments::Table)
                    .col(Enrollments::Lrn)
                    .col(Enrollments::SchoolYear)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_lrn")
                    .table(Payments::Table)
                    .col(Payments::Lrn)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_messages_receiver")
                    .table(Messages::Table)
                    .col(Messages::MessageReceiver)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_messages_sender")
                    .table(Messages::Table)
                    .col(Messages::MessageSender)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(Messages::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TuitionFees::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FinancialStatements::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Admins::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Students {
    #[sea_orm(iden = "students")]
    Table,
    Lrn,
    Fname,
    Mname,
    Lname,
    Suffix,
    Bdate,
    Bplace,
    Gender,
    Religion,
    Address,
    ContactNo,
    Email,
    PasswordHash,
    StudentPic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum Admins {
    #[sea_orm(iden = "admins")]
    Table,
    AdminId,
    Fname,
    Mname,
    Lname,
    Email,
    PasswordHash,
    AdminPic,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Enrollments {
    #[sea_orm(iden = "enrollments")]
    Table,
    EnrolId,
    Lrn,
    GradeLevel,
    GuardianName,
    GuardianNo,
    LastAttended,
    PublicPrivate,
    Strand,
    SchoolYear,
    DateRegister,
    RegapprovalDate,
    PaymentApproval,
    SectionId,
    OldAccount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    #[sea_orm(iden = "payments")]
    Table,
    PaymentId,
    Lrn,
    OrNumber,
    AmountPaid,
    ProofPayment,
    Description,
    DateOfPayment,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FinancialStatements {
    #[sea_orm(iden = "financial_statements")]
    Table,
    SoaId,
    Lrn,
    Filename,
    DateUploaded,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum TuitionFees {
    #[sea_orm(iden = "tuition_fees")]
    Table,
    FeeId,
    GradeLevel,
    Tuition,
    General,
    Esc,
    Subsidy,
    ReqDownpayment,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Messages {
    #[sea_orm(iden = "messages")]
    Table,
    MessageId,
    MessageSender,
    MessageReceiver,
    Message,
    MessageDate,
    ReadAt,
    CreatedAt,
    UpdatedAt,
}
